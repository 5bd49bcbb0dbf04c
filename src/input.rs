use std::io::{self, Read};

use aho_corasick::packed::Searcher;
use lib_tfe::Direction;

/// A decoded keypress the game cares about.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Dir(Direction),
    Enter,
    Space,
}

const PATTERNS: [&[u8]; 10] = [
    b"\x1b[A",
    b"\x1b[D",
    b"\x1b[C",
    b"\x1b[B",
    b"k",
    b"h",
    b"l",
    b"j",
    b"\n",
    b" ",
];

const KEYS: [Key; 10] = [
    Key::Dir(Direction::Up),
    Key::Dir(Direction::Left),
    Key::Dir(Direction::Right),
    Key::Dir(Direction::Down),
    Key::Dir(Direction::Up),
    Key::Dir(Direction::Left),
    Key::Dir(Direction::Right),
    Key::Dir(Direction::Down),
    Key::Enter,
    Key::Space,
];

/// Decodes arrow-key escape sequences and their hjkl equivalents from a raw
/// byte stream, keeping any partial escape sequence around for the next
/// read.
pub struct KeyReader<R> {
    input: R,
    searcher: Searcher,
    buf: [u8; 64],
    len: usize,
}

impl<R: Read> KeyReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            searcher: Searcher::new(PATTERNS).unwrap(),
            buf: [0; 64],
            len: 0,
        }
    }

    /// Block until a recognized key arrives. Unrecognized bytes are
    /// discarded.
    pub fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(found) = self.searcher.find(&self.buf[..self.len]) {
                let end = found.end();
                let key = KEYS[found.pattern().as_usize()];

                self.buf.copy_within(end..self.len, 0);
                self.len -= end;

                return Ok(key);
            }

            // Keep the tail of a partial escape sequence, drop the rest.
            self.len = match &self.buf[..self.len] {
                [.., 0x1b, b'['] => {
                    self.buf[0] = 0x1b;
                    self.buf[1] = b'[';
                    2
                }
                [.., 0x1b] => {
                    self.buf[0] = 0x1b;
                    1
                }
                _ => 0,
            };

            let read = self.input.read(&mut self.buf[self.len..])?;

            if read == 0 {
                return Err(io::ErrorKind::UnexpectedEof.into());
            }

            self.len += read;
        }
    }
}

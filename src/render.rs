use std::{
    io::{self, Write},
    mem::MaybeUninit,
    os::fd::AsRawFd,
};

use lib_tfe::{Board, SIZE};

const TOP_ROW: &[u8] = "┏━━━━━━┳━━━━━━┳━━━━━━┳━━━━━━┓\n".as_bytes();
const SEPARATOR_ROW: &[u8] = "┣━━━━━━╋━━━━━━╋━━━━━━╋━━━━━━┫\n".as_bytes();
const BOTTOM_ROW: &[u8] = "┗━━━━━━┻━━━━━━┻━━━━━━┻━━━━━━┛\n".as_bytes();

/// Clear the screen and draw a full frame: score line, grid, and an
/// optionally highlighted cell (reverse video) for cursor selection.
pub fn draw(
    out: &mut impl Write,
    board: Board,
    score: Option<u32>,
    highlight: Option<(usize, usize)>,
) -> io::Result<()> {
    out.write_all(b"\x1b[2J\x1b[H")?;

    if let Some(score) = score {
        writeln!(out, "Score: {score}\n")?;
    }

    out.write_all(TOP_ROW)?;

    for row in 0..SIZE {
        if row != 0 {
            out.write_all(SEPARATOR_ROW)?;
        }

        for col in 0..SIZE {
            out.write_all("┃".as_bytes())?;

            let selected = highlight == Some((row, col));

            if selected {
                out.write_all(b"\x1b[7m")?;
            }

            match board.get(row, col) {
                0 => out.write_all(b"      ")?,
                value => write!(out, "{value:^6}")?,
            }

            if selected {
                out.write_all(b"\x1b[m")?;
            }
        }

        out.write_all("┃\n".as_bytes())?;
    }

    out.write_all(BOTTOM_ROW)?;
    out.flush()
}

/// Plain dump of the final board for non-interactive runs.
pub fn print_plain(out: &mut impl Write, board: Board) -> io::Result<()> {
    for row in 0..SIZE {
        for col in 0..SIZE {
            match board.get(row, col) {
                0 => out.write_all(b"[    ]")?,
                value => write!(out, "[{value:4}]")?,
            }
        }

        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Turn off echo and line buffering so single keypresses arrive immediately.
pub fn setup_terminal(out: &impl AsRawFd) -> io::Result<()> {
    let fd = out.as_raw_fd();
    let mut termios = MaybeUninit::uninit();

    let mut termios = unsafe {
        if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
            return Err(io::Error::last_os_error());
        }

        termios.assume_init()
    };

    termios.c_lflag &= !(libc::ECHO | libc::ICANON);

    if unsafe { libc::tcsetattr(fd, libc::TCSADRAIN, &termios) } != 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

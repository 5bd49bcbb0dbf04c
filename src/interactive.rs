use std::io::{self, Stdin};

use lib_tfe::{ai::Player, gen::Generator, Board, Direction, Placement, SIZE};

use crate::{
    input::{Key, KeyReader},
    render,
};

/// Human player: blocks until an arrow or hjkl key arrives.
pub struct InteractivePlayer {
    keys: KeyReader<Stdin>,
}

impl InteractivePlayer {
    pub fn new() -> Self {
        Self {
            keys: KeyReader::new(io::stdin()),
        }
    }
}

impl Player for InteractivePlayer {
    fn next_move(&mut self, _board: Board) -> Direction {
        loop {
            if let Key::Dir(direction) = self.keys.next_key().expect("stdin closed") {
                return direction;
            }
        }
    }
}

/// Human tile generator: move the cursor to an empty cell, then Enter spawns
/// a 2 and Space spawns a 4. Occupied cells are refused.
pub struct InteractiveGenerator {
    keys: KeyReader<Stdin>,
}

impl InteractiveGenerator {
    pub fn new() -> Self {
        Self {
            keys: KeyReader::new(io::stdin()),
        }
    }
}

impl Generator for InteractiveGenerator {
    fn next_tile(&mut self, board: Board) -> Placement {
        let mut out = io::stdout();
        let (mut row, mut col) = (0, 0);

        loop {
            render::draw(&mut out, board, None, Some((row, col))).expect("failed to draw board");

            match self.keys.next_key().expect("stdin closed") {
                Key::Dir(Direction::Up) => row = row.saturating_sub(1),
                Key::Dir(Direction::Down) => row = (row + 1).min(SIZE - 1),
                Key::Dir(Direction::Left) => col = col.saturating_sub(1),
                Key::Dir(Direction::Right) => col = (col + 1).min(SIZE - 1),
                Key::Enter if board.get(row, col) == 0 => {
                    return Placement { row, col, value: 2 };
                }
                Key::Space if board.get(row, col) == 0 => {
                    return Placement { row, col, value: 4 };
                }
                _ => {}
            }
        }
    }
}

use crate::{gen::Generator, logic, Board, Direction, Placement};

use super::Player;

pub const DEFAULT_DEPTH: u32 = 5;

/// Maximizes merge score over a bounded look-ahead, assuming the generator
/// answers every move with the most damaging tile it can find.
pub struct MinimaxPlayer {
    depth: u32,
}

impl MinimaxPlayer {
    pub const fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Player for MinimaxPlayer {
    fn next_move(&mut self, board: Board) -> Direction {
        best_move(board, self.depth).map_or(Direction::Up, |(direction, _)| direction)
    }
}

/// The adversarial half of the same search: spawns the tile that minimizes
/// the player's best continuation.
pub struct MinimaxGenerator {
    depth: u32,
}

impl MinimaxGenerator {
    pub const fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Default for MinimaxGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Generator for MinimaxGenerator {
    fn next_tile(&mut self, board: Board) -> Placement {
        worst_placement(board, self.depth)
            .map(|(placement, _)| placement)
            .expect("generator invoked on a full board")
    }
}

// Best direction and its value for the maximizing side. A direction is worth
// the score its shift earns plus the value of the position after the
// adversary's reply. Ties keep the earliest direction in scan order.
fn best_move(board: Board, depth: u32) -> Option<(Direction, f64)> {
    Direction::iter()
        .filter_map(|direction| {
            logic::try_shift(board, direction).map(|(shifted, delta)| {
                let continuation = if depth > 1 {
                    worst_placement(shifted, depth - 1).map_or(0.0, |(_, value)| value)
                } else {
                    0.0
                };

                (direction, f64::from(delta) + continuation)
            })
        })
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
}

// Worst spawn for the player. Only 2-tiles are searched; trying 4s as well
// doubles the work without changing the outcome much, a deliberate
// simplification. A placement that ends the game immediately wins outright
// and cuts the search short.
fn worst_placement(board: Board, depth: u32) -> Option<(Placement, f64)> {
    let mut worst: Option<(Placement, f64)> = None;

    for (row, col) in board.empty_cells() {
        let placement = Placement { row, col, value: 2 };
        let placed = logic::place(board, placement);

        if logic::gameover(placed) {
            return Some((placement, 0.0));
        }

        let value = if depth > 1 {
            best_move(placed, depth - 1).map_or(0.0, |(_, value)| value)
        } else {
            0.0
        };

        if worst.map_or(true, |(_, lowest)| value < lowest) {
            worst = Some((placement, value));
        }
    }

    worst
}

use rand::Rng;

use crate::{Board, Placement};

/// Chooses where and what to spawn after every accepted move.
///
/// Implementations must return a currently-empty cell; callers guarantee at
/// least one exists (the game loop checks for gameover before every turn).
pub trait Generator {
    fn next_tile(&mut self, board: Board) -> Placement;
}

pub struct RandomGenerator<R> {
    rng: R,
}

impl<R> RandomGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Generator for RandomGenerator<R> {
    fn next_tile(&mut self, board: Board) -> Placement {
        // One draw decides both the cell and the one-in-ten chance of a 4.
        let roll = self.rng.gen_range(0..board.count_empty() * 10);

        let (row, col) = board
            .empty_cells()
            .nth(roll / 10)
            .expect("generator invoked on a full board");
        let value = if roll % 10 == 0 { 4 } else { 2 };

        Placement { row, col, value }
    }
}

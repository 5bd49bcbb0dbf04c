use rand::Rng;

use crate::{Board, Direction};

use super::Player;

/// Picks any of the four directions uniformly, legal or not.
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R> RandomPlayer<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn next_move(&mut self, _board: Board) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

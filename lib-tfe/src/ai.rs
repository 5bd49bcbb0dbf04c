use crate::{Board, Direction};

pub mod expectimax;
pub mod minimax;
pub mod priority;
pub mod random;

pub use expectimax::ExpectimaxPlayer;
pub use minimax::{MinimaxGenerator, MinimaxPlayer};
pub use priority::{PriorityPlayer, RotatingPlayer};
pub use random::RandomPlayer;

/// Chooses a shift direction each turn. Illegal choices are allowed; the
/// game loop absorbs them and asks again.
pub trait Player {
    fn next_move(&mut self, board: Board) -> Direction;
}

use crate::{logic, Board, Direction};

use super::Player;

/// Tries Up, then Left, then Right, settling for the first that changes the
/// board. Down is never checked: it is the fallback.
pub struct PriorityPlayer;

impl Player for PriorityPlayer {
    fn next_move(&mut self, board: Board) -> Direction {
        [Direction::Up, Direction::Left, Direction::Right]
            .into_iter()
            .find(|&direction| logic::try_shift(board, direction).is_some())
            .unwrap_or(Direction::Down)
    }
}

/// Cycles Up, Left, Right, Down regardless of legality. The position in the
/// cycle belongs to the instance, so concurrent games don't share it.
pub struct RotatingPlayer {
    next: Direction,
}

impl RotatingPlayer {
    pub const fn new() -> Self {
        Self {
            next: Direction::Up,
        }
    }
}

impl Default for RotatingPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RotatingPlayer {
    fn next_move(&mut self, _board: Board) -> Direction {
        let direction = self.next;

        self.next = match direction {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Up,
        };

        direction
    }
}

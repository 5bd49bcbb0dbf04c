use std::array;

use crate::{Board, Direction, Placement, SIZE};

// Maps (line, position) to a board cell, with position 0 at the edge the
// tiles compact towards.
fn cell_index(direction: Direction, line: usize, pos: usize) -> (usize, usize) {
    match direction {
        Direction::Left => (line, pos),
        Direction::Right => (line, SIZE - 1 - pos),
        Direction::Up => (pos, line),
        Direction::Down => (SIZE - 1 - pos, line),
    }
}

// Compact a line towards index 0, merging adjacent equal tiles once per
// pass. A tile produced by a merge never merges again in the same shift.
fn collapse_line(line: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let mut collapsed = [0; SIZE];
    let mut len = 0;
    let mut delta = 0;
    let mut open = 0;

    for value in line.into_iter().filter(|&value| value != 0) {
        if value == open {
            collapsed[len - 1] = value * 2;
            delta += value * 2;
            open = 0;
        } else {
            collapsed[len] = value;
            len += 1;
            open = value;
        }
    }

    (collapsed, delta)
}

/// Apply a shift to the board, returning the shifted board and the score
/// gained from merges. The input is untouched; compare it against the result
/// to see whether the move did anything.
pub fn shift(board: Board, direction: Direction) -> (Board, u32) {
    let mut shifted = Board::EMPTY;
    let mut delta = 0;

    for line in 0..SIZE {
        let cells = array::from_fn(|pos| {
            let (row, col) = cell_index(direction, line, pos);
            board.get(row, col)
        });

        let (collapsed, line_delta) = collapse_line(cells);
        delta += line_delta;

        for (pos, value) in collapsed.into_iter().enumerate() {
            let (row, col) = cell_index(direction, line, pos);
            shifted.set(row, col, value);
        }
    }

    (shifted, delta)
}

/// `None` when the shift is a no-op. The game loop uses this to decide
/// whether a new tile gets spawned; search code uses it to prune illegal
/// moves.
pub fn try_shift(board: Board, direction: Direction) -> Option<(Board, u32)> {
    let (shifted, delta) = shift(board, direction);

    (shifted != board).then_some((shifted, delta))
}

pub fn place(board: Board, placement: Placement) -> Board {
    let mut board = board;
    board.set(placement.row, placement.col, placement.value);
    board
}

/// The game is over when the board is full and all four shifts are no-ops.
/// The shift checks alone would do; scanning for an empty cell first is far
/// cheaper on average.
pub fn gameover(board: Board) -> bool {
    board.count_empty() == 0
        && Direction::iter().all(|direction| try_shift(board, direction).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [[u32; SIZE]; SIZE]) -> Board {
        Board::from(cells)
    }

    fn tile_sum(board: Board) -> u32 {
        board.cells().map(|(_, value)| value).sum()
    }

    #[test]
    fn compaction_preserves_relative_order() {
        let before = board([[0, 2, 0, 4], [0; 4], [0; 4], [0; 4]]);
        let (after, delta) = shift(before, Direction::Left);

        assert_eq!(after, board([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(delta, 0);
        assert!(try_shift(before, Direction::Left).is_some());
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let before = board([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let (after, delta) = shift(before, Direction::Left);

        assert_eq!(after, board([[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(delta, 4);
    }

    #[test]
    fn full_line_merges_pairwise() {
        let before = board([[4, 4, 4, 4], [0; 4], [0; 4], [0; 4]]);
        let (after, delta) = shift(before, Direction::Left);

        assert_eq!(after, board([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(delta, 16);
    }

    #[test]
    fn noop_shift_is_the_identity() {
        let before = board([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);

        assert!(try_shift(before, Direction::Left).is_none());
        assert_eq!(shift(before, Direction::Left), (before, 0));
    }

    #[test]
    fn shifts_work_in_every_direction() {
        let before = board([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let (after, delta) = shift(before, Direction::Right);
        assert_eq!(after, board([[0, 0, 0, 4], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(delta, 4);

        let before = board([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let (up, delta) = shift(before, Direction::Up);
        assert_eq!(up.get(0, 0), 4);
        assert_eq!(delta, 4);

        let (down, delta) = shift(before, Direction::Down);
        assert_eq!(down.get(3, 0), 4);
        assert_eq!(delta, 4);
    }

    #[test]
    fn tile_sum_is_conserved_and_delta_counts_merges() {
        let before = board([
            [2, 2, 4, 4],
            [8, 0, 8, 0],
            [0, 0, 0, 0],
            [2, 2, 2, 2],
        ]);
        let (after, delta) = shift(before, Direction::Left);

        assert_eq!(tile_sum(after), tile_sum(before));
        assert_eq!(delta, 4 + 8 + 16 + 4 + 4);
    }

    #[test]
    fn gameover_needs_a_full_stuck_board() {
        let stuck = board([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(gameover(stuck));

        let mut mergeable = stuck;
        mergeable.set(0, 1, 2);
        assert!(!gameover(mergeable));

        let mut gap = stuck;
        gap.set(3, 3, 0);
        assert!(!gameover(gap));
    }
}

use crate::{Board, SIZE};

/// Judge how good a board is for the player, without look-ahead.
///
/// Sums the signed differences between adjacent cells (the last row and
/// column are not scanned as left-hand neighbours; the top row counts
/// double), adds the mean occupied tile value, and discounts the total
/// sharply when fewer than four cells are free. A full board with no merge
/// seen in the scan scores exactly 0: certain death outranks any tile
/// arrangement.
pub fn eval(board: Board) -> f64 {
    let mut score = 0.0;
    let mut merge_available = false;

    for row in 0..SIZE - 1 {
        for col in 0..SIZE - 1 {
            let row_diff =
                f64::from(board.get(row, col)) - f64::from(board.get(row + 1, col));
            let col_diff =
                f64::from(board.get(row, col)) - f64::from(board.get(row, col + 1));
            let weight = if row == 0 { 2.0 } else { 1.0 };

            if row_diff == 0.0 || col_diff == 0.0 {
                merge_available = true;
            }

            score += weight * (row_diff + col_diff);
        }
    }

    let (total, occupied) = board
        .cells()
        .filter(|&(_, value)| value != 0)
        .fold((0u32, 0u32), |(total, occupied), (_, value)| {
            (total + value, occupied + 1)
        });
    let empty = SIZE * SIZE - occupied as usize;

    if occupied > 0 {
        score += f64::from(total) / f64::from(occupied);
    }

    if empty < 4 {
        score /= (5 - empty) as f64;
    }

    if empty == 0 && !merge_available {
        return 0.0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkered() -> Board {
        Board::from([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
    }

    #[test]
    fn dead_full_board_scores_zero() {
        assert_eq!(eval(checkered()), 0.0);
    }

    #[test]
    fn full_board_with_merges_keeps_its_score() {
        // Smoothness cancels out, density is 2, near-death divides by 5.
        let board = Board::from([[2; SIZE]; SIZE]);

        assert!((eval(board) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn sparse_board_value_by_hand() {
        let board = Board::from([
            [4, 2, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        // Doubled top-row differences contribute 16, the (1, 0) pair adds 4,
        // and the three tiles average to 8/3.
        assert!((eval(board) - (20.0 + 8.0 / 3.0)).abs() < 1e-9);
    }
}

use crate::{logic, metrics, Board, Direction, Placement};

use super::Player;

const TILE_ODDS: [(u32, f64); 2] = [(2, 0.9), (4, 0.1)];

/// Expectimax: the spawn step is a weighted-average chance event rather than
/// an adversary. Depth adapts to board occupancy, since every empty cell
/// doubles as two chance branches and the branching factor would otherwise
/// explode on open boards.
pub struct ExpectimaxPlayer {
    /// Skip evaluating Down once an earlier direction has scored above zero.
    /// Down is scanned last and rarely optimal, so this saves up to a
    /// quarter of the root work at the cost of an occasional suboptimal
    /// pick. Heuristic shortcut, not load-bearing.
    pub skip_down_when_positive: bool,
    leaves: u64,
}

impl ExpectimaxPlayer {
    pub const fn new() -> Self {
        Self {
            skip_down_when_positive: true,
            leaves: 0,
        }
    }

    /// Leaf evaluations performed since construction.
    pub const fn leaves(&self) -> u64 {
        self.leaves
    }

    fn best_move(&mut self, board: Board, depth: u32) -> Option<(Direction, f64)> {
        let mut best = None;
        let mut max = 0.0;

        for direction in Direction::iter() {
            if direction == Direction::Down && self.skip_down_when_positive && max > 0.0 {
                break;
            }

            let Some((shifted, _)) = logic::try_shift(board, direction) else {
                continue;
            };

            // A legal move scoring zero still beats having none at all.
            if best.is_none() {
                best = Some(direction);
            }

            let value = if depth <= 1 {
                self.leaves += 1;
                metrics::eval(shifted)
            } else {
                self.chance_value(shifted, depth)
            };

            if value > max {
                max = value;
                best = Some(direction);
            }
        }

        best.map(|direction| (direction, max))
    }

    // Expected value of the spawn step: every empty cell weighs a 2 at 0.9
    // against a 4 at 0.1, spawns that end the game are skipped, and the
    // per-cell sums are averaged over the cells that contributed.
    fn chance_value(&mut self, board: Board, depth: u32) -> f64 {
        let mut total = 0.0;
        let mut contributing = 0u32;

        for (row, col) in board.empty_cells() {
            let mut cell_value = 0.0;
            let mut alive = false;

            for (value, weight) in TILE_ODDS {
                let placed = logic::place(board, Placement { row, col, value });

                if !logic::gameover(placed) {
                    let child = self
                        .best_move(placed, depth - 2)
                        .map_or(0.0, |(_, value)| value);

                    cell_value += weight * child;
                    alive = true;
                }
            }

            if alive {
                total += cell_value;
                contributing += 1;
            }
        }

        if contributing == 0 {
            0.0
        } else {
            total / f64::from(contributing)
        }
    }
}

impl Default for ExpectimaxPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ExpectimaxPlayer {
    fn next_move(&mut self, board: Board) -> Direction {
        let depth = search_depth(board.count_empty());

        self.best_move(board, depth)
            .map_or(Direction::Up, |(direction, _)| direction)
    }
}

/// Deeper search the fuller the board: fewer empty cells shrink the
/// branching factor, and a nearly-full board needs the foresight most.
const fn search_depth(empty: usize) -> u32 {
    match empty {
        0 => 7,
        1..=7 => 5,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_adapts_to_occupancy() {
        assert_eq!(search_depth(0), 7);
        assert_eq!(search_depth(1), 5);
        assert_eq!(search_depth(7), 5);
        assert_eq!(search_depth(8), 3);
        assert_eq!(search_depth(16), 3);
    }

    #[test]
    fn chance_node_weights_two_and_four_nine_to_one() {
        // One empty cell; both spawns leave a legal merge, so neither branch
        // is skipped.
        let board = Board::from([
            [32, 16, 32, 16],
            [16, 32, 16, 32],
            [32, 16, 32, 2],
            [16, 32, 4, 0],
        ]);
        let mut player = ExpectimaxPlayer::new();

        let two = logic::place(
            board,
            Placement {
                row: 3,
                col: 3,
                value: 2,
            },
        );
        let four = logic::place(
            board,
            Placement {
                row: 3,
                col: 3,
                value: 4,
            },
        );
        assert!(!logic::gameover(two));
        assert!(!logic::gameover(four));

        let child_two = player.best_move(two, 1).map_or(0.0, |(_, value)| value);
        let child_four = player.best_move(four, 1).map_or(0.0, |(_, value)| value);
        let expected = 0.9 * child_two + 0.1 * child_four;

        assert!((player.chance_value(board, 3) - expected).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_the_only_legal_direction() {
        // Top row full and compacted: only Down moves anything.
        let board = Board::from([[2, 4, 2, 4], [0; 4], [0; 4], [0; 4]]);
        let mut player = ExpectimaxPlayer::new();

        assert_eq!(player.next_move(board), Direction::Down);
    }

    #[test]
    fn counts_leaves_at_the_horizon() {
        let board = Board::from([
            [2, 4, 2, 0],
            [4, 2, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut player = ExpectimaxPlayer::new();

        player.next_move(board);

        assert!(player.leaves() > 0);
    }
}

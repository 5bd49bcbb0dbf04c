use std::ops::ControlFlow;

use crate::{ai::Player, control_flow_helper, gen::Generator, logic, Board};

/// Run one game to completion: the player picks shifts, the generator
/// answers every accepted shift with a new tile, and rejected shifts are
/// absorbed silently by asking the player again. Returns the final board and
/// score.
///
/// `observer` sees the board and score before every turn; pass a no-op for a
/// headless game.
pub fn play(
    player: &mut dyn Player,
    generator: &mut dyn Generator,
    observer: &mut dyn FnMut(Board, u32),
) -> (Board, u32) {
    let board = logic::place(Board::EMPTY, generator.next_tile(Board::EMPTY));
    let board = logic::place(board, generator.next_tile(board));

    control_flow_helper::loop_try_fold((board, 0), |(board, score)| {
        if logic::gameover(board) {
            return ControlFlow::Break((board, score));
        }

        observer(board, score);

        let direction = player.next_move(board);

        match logic::try_shift(board, direction) {
            Some((shifted, delta)) => {
                let spawned = logic::place(shifted, generator.next_tile(shifted));

                ControlFlow::Continue((spawned, score + delta))
            }
            None => ControlFlow::Continue((board, score)),
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::ai::PriorityPlayer;
    use crate::Placement;

    use super::*;

    // Deterministic stand-in for the random generator: always a 2 in the
    // first empty cell, row-major.
    struct FirstEmptyGenerator;

    impl Generator for FirstEmptyGenerator {
        fn next_tile(&mut self, board: Board) -> Placement {
            let (row, col) = board.empty_cells().next().unwrap();

            Placement { row, col, value: 2 }
        }
    }

    #[test]
    fn scripted_game_runs_to_completion() {
        let mut player = PriorityPlayer;
        let mut generator = FirstEmptyGenerator;
        let mut first_turn: Option<(Board, u32)> = None;

        let (final_board, score) = play(&mut player, &mut generator, &mut |board, score| {
            first_turn.get_or_insert((board, score));
        });

        let (first_board, first_score) = first_turn.unwrap();
        let seeded = first_board
            .cells()
            .filter(|&(_, value)| value != 0)
            .count();

        assert_eq!(seeded, 2);
        assert_eq!(first_score, 0);
        assert!(logic::gameover(final_board));
        assert_eq!(final_board.count_empty(), 0);
        assert!(score > 0);
    }
}

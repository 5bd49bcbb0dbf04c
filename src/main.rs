use std::{
    env,
    io::{self, Write},
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lib_tfe::{
    ai::{
        ExpectimaxPlayer, MinimaxGenerator, MinimaxPlayer, Player, PriorityPlayer, RandomPlayer,
        RotatingPlayer,
    },
    game,
    gen::{Generator, RandomGenerator},
    Board,
};

mod input;
mod interactive;
mod render;

const USAGE: &str = "\
usage: tfe [OPTIONS] [-c <games>]

Shift with the arrow keys or hjkl. When playing as the tile generator, move
the cursor with the arrow keys, then press Enter to spawn a 2 or Space to
spawn a 4.

General:
    -h      print this message and exit
    -p      print the final board
    -w      step through a computer-vs-computer game on keypress
    -c <n>  play n games (default 1)

Player:
    -r      random
    -n      interactive (default)
    -m      minimax
    -e      expectimax
    -s      fixed priority
    -v      rotating

Tile generator:
    -R      random (default)
    -N      interactive
    -M      minimax";

#[derive(Clone, Copy)]
enum PlayerKind {
    Interactive,
    Random,
    Minimax,
    Expectimax,
    Priority,
    Rotating,
}

#[derive(Clone, Copy)]
enum GeneratorKind {
    Random,
    Interactive,
    Minimax,
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();

    let mut player_kind = PlayerKind::Interactive;
    let mut generator_kind = GeneratorKind::Random;
    let mut watch = false;
    let mut print_final = false;
    let mut games = 1u32;

    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        let Some(flags) = arg.strip_prefix('-') else {
            return writeln!(stdout, "Unexpected argument: {arg}\n\n{USAGE}");
        };

        for flag in flags.chars() {
            match flag {
                'h' => return writeln!(stdout, "{USAGE}"),
                'w' => watch = true,
                'p' => print_final = true,
                'c' => {
                    let Some(count) = args.next().and_then(|count| count.parse().ok()) else {
                        return writeln!(stdout, "-c needs a game count\n\n{USAGE}");
                    };

                    games = count;
                }
                'r' => player_kind = PlayerKind::Random,
                'n' => player_kind = PlayerKind::Interactive,
                'm' => player_kind = PlayerKind::Minimax,
                'e' => player_kind = PlayerKind::Expectimax,
                's' => player_kind = PlayerKind::Priority,
                'v' => player_kind = PlayerKind::Rotating,
                'R' => generator_kind = GeneratorKind::Random,
                'N' => generator_kind = GeneratorKind::Interactive,
                'M' => generator_kind = GeneratorKind::Minimax,
                _ => return writeln!(stdout, "Invalid option: {flag}\n\n{USAGE}"),
            }
        }
    }

    let interactive = matches!(player_kind, PlayerKind::Interactive)
        || matches!(generator_kind, GeneratorKind::Interactive);
    let display = interactive || watch;

    if display {
        render::setup_terminal(&stdout)?;
    }

    let mut player: Box<dyn Player> = match player_kind {
        PlayerKind::Interactive => Box::new(interactive::InteractivePlayer::new()),
        PlayerKind::Random => Box::new(RandomPlayer::new(ChaCha8Rng::from_entropy())),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::default()),
        PlayerKind::Expectimax => Box::new(ExpectimaxPlayer::new()),
        PlayerKind::Priority => Box::new(PriorityPlayer),
        PlayerKind::Rotating => Box::new(RotatingPlayer::new()),
    };

    let mut generator: Box<dyn Generator> = match generator_kind {
        GeneratorKind::Random => Box::new(RandomGenerator::new(ChaCha8Rng::from_entropy())),
        GeneratorKind::Interactive => Box::new(interactive::InteractiveGenerator::new()),
        GeneratorKind::Minimax => Box::new(MinimaxGenerator::default()),
    };

    // Stepping only makes sense when no human is already pacing the game.
    let mut step_keys = (watch && !interactive).then(|| input::KeyReader::new(io::stdin()));

    for _ in 0..games {
        let mut observer = |board: Board, score: u32| {
            if display {
                let mut out = io::stdout();

                render::draw(&mut out, board, Some(score), None).expect("failed to draw board");

                if let Some(keys) = step_keys.as_mut() {
                    keys.next_key().expect("stdin closed");
                }
            }
        };

        let (final_board, score) = game::play(player.as_mut(), generator.as_mut(), &mut observer);

        if print_final {
            render::print_plain(&mut stdout, final_board)?;
        }

        writeln!(stdout, "{score}")?;
    }

    Ok(())
}

use std::io::{self, BufRead, Write};

use chessbot::game_state::chess_types::{CheckState, GameOutcome};
use chessbot::game_state::game_state::Game;
use chessbot::game_state::rules_config::RulesConfig;
use chessbot::utils::long_algebraic::long_algebraic_to_move;
use chessbot::utils::render_game_state::render_board;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout, RulesConfig::from_env())
}

/// Read commands and long algebraic moves until `quit` or end of input.
/// Rule violations are printed; only terminal I/O failures end the loop early.
fn run(input: impl BufRead, output: &mut impl Write, config: RulesConfig) -> io::Result<()> {
    let mut game = Game::with_config(config);

    writeln!(output, "{}", render_board(game.board()))?;
    prompt(output, &game)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            prompt(output, &game)?;
            continue;
        }

        match command {
            "quit" | "exit" => break,
            "board" => writeln!(output, "{}", render_board(game.board()))?,
            "fen" => writeln!(output, "{}", game.get_fen())?,
            "resign" => match game.resign(game.side_to_move()) {
                Ok(outcome) => report_outcome(output, outcome)?,
                Err(err) => writeln!(output, "{err}")?,
            },
            "draw" => match game.agree_draw() {
                Ok(outcome) => report_outcome(output, outcome)?,
                Err(err) => writeln!(output, "{err}")?,
            },
            text => {
                let played = long_algebraic_to_move(text, game.board())
                    .and_then(|mv| game.attempt_move(&mv));
                match played {
                    Ok(check) => {
                        writeln!(output, "{}", render_board(game.board()))?;
                        match check {
                            CheckState::NoCheck => {}
                            CheckState::WhiteInCheck => writeln!(output, "white is in check")?,
                            CheckState::BlackInCheck => writeln!(output, "black is in check")?,
                        }
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
        }

        prompt(output, &game)?;
    }

    Ok(())
}

fn prompt(output: &mut impl Write, game: &Game) -> io::Result<()> {
    if game.outcome().is_over() {
        write!(output, "game over> ")?;
    } else {
        write!(output, "{} to move> ", game.side_to_move())?;
    }
    output.flush()
}

fn report_outcome(output: &mut impl Write, outcome: GameOutcome) -> io::Result<()> {
    match outcome {
        GameOutcome::Ongoing => Ok(()),
        GameOutcome::Resigned { winner } => writeln!(output, "{winner} wins by resignation"),
        GameOutcome::DrawAgreed => writeln!(output, "draw agreed"),
    }
}

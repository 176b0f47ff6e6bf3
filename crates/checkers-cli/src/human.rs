//! Interactive contestant reading choices from a terminal.

use crate::contestant::{Contestant, PlayError};
use checkers_core::{Location, Move, Turn};
use checkers_engine::Game;
use std::io::{BufRead, Write};

/// Asks a person for a piece and then for one of its moves.
///
/// Rejected selections are explained using the engine's movability reasons.
/// Entering `0` at the move prompt goes back to choosing a piece.
pub struct HumanContestant<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    /// Creates a contestant reading from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        HumanContestant { input, output }
    }

    fn read_line(&mut self) -> Result<String, PlayError> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn select_piece(&mut self, game: &Game) -> Result<Location, PlayError> {
        writeln!(self.output, "Select a piece to move.")?;
        loop {
            let line = self.read_line()?;
            let location = match Location::from_notation(&line) {
                Ok(location) => location,
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "unparsable location");
                    writeln!(
                        self.output,
                        "That's not a valid square. Try something like \"h6\"..."
                    )?;
                    continue;
                }
            };
            match game.movability(Some(location)) {
                None => return Ok(location),
                Some(reason) => writeln!(self.output, "{}", reason)?,
            }
        }
    }

    /// Returns the chosen move, or `None` to pick another piece.
    fn select_move(
        &mut self,
        game: &Game,
        origin: Location,
        moves: &[Move],
    ) -> Result<Option<Move>, PlayError> {
        let player = game.active_player();
        writeln!(self.output, "Valid options are:")?;
        writeln!(self.output, "\t0: choose a different piece")?;
        for (i, m) in moves.iter().enumerate() {
            writeln!(self.output, "\t{}: {}", i + 1, m.describe(origin, player))?;
        }
        loop {
            let line = self.read_line()?;
            let choice: usize = match line.parse() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "That's not a valid number.")?;
                    continue;
                }
            };
            if choice == 0 {
                return Ok(None);
            }
            match moves.get(choice - 1) {
                Some(m) => return Ok(Some(m.clone())),
                None => writeln!(
                    self.output,
                    "Please input a number in the range 0 to {}.",
                    moves.len()
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_turn(&mut self, game: &Game) -> Result<Option<Turn>, PlayError> {
        if game.is_game_over() {
            return Ok(None);
        }
        loop {
            let origin = self.select_piece(game)?;
            let moves = game.legal_moves(origin)?;
            if let Some(m) = self.select_move(game, origin, &moves)? {
                return Ok(Some(Turn::new(origin, game.active_player(), m)));
            }
        }
    }

    fn is_automatic(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{MoveDirection, Player};
    use std::io::Cursor;

    fn run(input: &str, game: &Game) -> (Result<Option<Turn>, PlayError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut human = HumanContestant::new(Cursor::new(input.to_string()), &mut output);
            human.choose_turn(game)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn picks_piece_and_move() {
        let game = Game::new();
        let (result, output) = run("f6\n2\n", &game);
        let turn = result.unwrap().unwrap();
        assert_eq!(turn.origin, Location::new(2, 5));
        assert_eq!(turn.player, Player::Red);
        assert_eq!(turn.mov, Move::Simple(MoveDirection::Right));
        assert!(output.contains("Select a piece to move."));
        assert!(output.contains("\t1: f6 -> g5"));
        assert!(output.contains("\t2: f6 -> e5"));
    }

    #[test]
    fn explains_rejected_selections() {
        let game = Game::new();
        let (result, output) = run("z9\nh5\ng1\nh8\nh6\n1\n", &game);
        assert!(result.unwrap().is_some());
        assert!(output.contains("That's not a valid square."));
        assert!(output.contains("That square is empty."));
        assert!(output.contains("That piece doesn't belong to Red."));
        assert!(output.contains("That piece has no valid moves."));
    }

    #[test]
    fn explains_forced_capture() {
        let game = Game::from_diagram("8/8/8/4b3/3r4/8/8/r7 r").unwrap();
        let (result, output) = run("h8\ne5\n1\n", &game);
        let turn = result.unwrap().unwrap();
        assert!(turn.mov.is_capture());
        assert!(output.contains("Red must jump, and that piece is not a valid jumper."));
        assert!(output.contains("\t1: e5 -> c3"));
    }

    #[test]
    fn rejects_bad_numbers() {
        let game = Game::new();
        let (result, output) = run("h6\nabc\n5\n1\n", &game);
        assert!(result.unwrap().is_some());
        assert!(output.contains("That's not a valid number."));
        assert!(output.contains("Please input a number in the range 0 to 1."));
    }

    #[test]
    fn zero_goes_back_to_piece_selection() {
        let game = Game::new();
        let (result, output) = run("h6\n0\nb6\n1\n", &game);
        let turn = result.unwrap().unwrap();
        assert_eq!(turn.origin, Location::from_notation("b6").unwrap());
        assert_eq!(output.matches("Select a piece to move.").count(), 2);
    }

    #[test]
    fn closed_input() {
        let game = Game::new();
        let (result, _) = run("h5\n", &game);
        assert!(matches!(result, Err(PlayError::InputClosed)));
    }
}

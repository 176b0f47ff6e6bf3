//! Running games between two contestants.

use crate::contestant::{Contestant, PlayError, RandomContestant};
use checkers_core::Player;
use checkers_engine::{Game, GameOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::Write;

/// How a single game went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// `None` if the game was abandoned at the turn limit.
    pub outcome: Option<GameOutcome>,
    pub plies: u32,
}

/// Options for [`run_game`].
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Abandon the game after this many turns.
    pub max_turns: u32,
    /// Print the board before every turn.
    pub show_board: bool,
}

/// Plays `game` to the end, or until the turn limit.
pub fn run_game<W: Write>(
    mut game: Game,
    red: &mut dyn Contestant,
    black: &mut dyn Contestant,
    out: &mut W,
    options: RunOptions,
) -> Result<GameReport, PlayError> {
    loop {
        if options.show_board {
            writeln!(out)?;
            writeln!(out, "{}", game.board())?;
            writeln!(out)?;
        }

        if let Some(outcome) = game.outcome() {
            if options.show_board {
                writeln!(
                    out,
                    "Game over! {} has no moves left.",
                    outcome.stalled_player()
                )?;
            }
            return Ok(GameReport {
                outcome: Some(outcome),
                plies: game.ply_count(),
            });
        }

        if game.ply_count() >= options.max_turns {
            tracing::warn!(max_turns = options.max_turns, "turn limit reached, abandoning game");
            return Ok(GameReport {
                outcome: None,
                plies: game.ply_count(),
            });
        }

        let player = game.active_player();
        let contestant: &mut dyn Contestant = match player {
            Player::Red => &mut *red,
            Player::Black => &mut *black,
        };
        if options.show_board {
            writeln!(out, "{}'s turn", player)?;
        }

        let turn = match contestant.choose_turn(&game)? {
            Some(turn) => turn,
            None => {
                // Only reachable if a contestant disagrees with the engine.
                tracing::warn!(%player, contestant = contestant.name(), "no turn chosen");
                return Ok(GameReport {
                    outcome: game.outcome(),
                    plies: game.ply_count(),
                });
            }
        };
        if options.show_board && contestant.is_automatic() {
            writeln!(out, "{} plays {}", player, turn)?;
        }
        game.play_turn(&turn)?;
    }
}

/// Results of a batch of random-vs-random games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelfPlaySummary {
    pub seed: u64,
    pub games: u32,
    /// Games that ended with Red to move and unable to.
    pub red_stalled: u32,
    /// Games that ended with Black to move and unable to.
    pub black_stalled: u32,
    /// Games abandoned at the turn limit.
    pub unfinished: u32,
    pub total_plies: u64,
    pub longest_game: u32,
}

impl SelfPlaySummary {
    fn record(&mut self, report: GameReport) {
        self.games += 1;
        match report.outcome {
            Some(GameOutcome::Stalled(Player::Red)) => self.red_stalled += 1,
            Some(GameOutcome::Stalled(Player::Black)) => self.black_stalled += 1,
            None => self.unfinished += 1,
        }
        self.total_plies += u64::from(report.plies);
        self.longest_game = self.longest_game.max(report.plies);
    }
}

/// Plays `games` random-vs-random games from the starting layout.
///
/// Each game's contestants are seeded from `seed` and the game index, so a
/// batch is reproducible.
pub fn self_play(games: u32, max_turns: u32, seed: u64) -> Result<SelfPlaySummary, PlayError> {
    let mut summary = SelfPlaySummary {
        seed,
        ..SelfPlaySummary::default()
    };
    let options = RunOptions {
        max_turns,
        show_board: false,
    };

    for index in 0..games {
        let game_seed = seed.wrapping_add(u64::from(index) * 2);
        let mut red = RandomContestant::new(StdRng::seed_from_u64(game_seed));
        let mut black = RandomContestant::new(StdRng::seed_from_u64(game_seed.wrapping_add(1)));
        let report = run_game(Game::new(), &mut red, &mut black, &mut std::io::sink(), options)?;
        tracing::debug!(game = index, plies = report.plies, outcome = ?report.outcome, "self-play game finished");
        summary.record(report);
    }

    tracing::info!(
        games = summary.games,
        red_stalled = summary.red_stalled,
        black_stalled = summary.black_stalled,
        unfinished = summary.unfinished,
        "self-play complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::human::HumanContestant;
    use std::io::Cursor;

    #[test]
    fn random_game_runs_to_completion() {
        let mut red = RandomContestant::new(StdRng::seed_from_u64(3));
        let mut black = RandomContestant::new(StdRng::seed_from_u64(4));
        let mut out = Vec::new();
        let report = run_game(
            Game::new(),
            &mut red,
            &mut black,
            &mut out,
            RunOptions {
                max_turns: 500,
                show_board: true,
            },
        )
        .unwrap();

        assert!(report.outcome.is_some());
        assert!(report.plies <= 168);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Red's turn"));
        assert!(text.contains("Red plays "));
        assert!(text.contains("  hgfedcba"));
        assert!(text.contains("Game over! "));
    }

    #[test]
    fn turn_limit_abandons_game() {
        let mut red = RandomContestant::new(StdRng::seed_from_u64(3));
        let mut black = RandomContestant::new(StdRng::seed_from_u64(4));
        let report = run_game(
            Game::new(),
            &mut red,
            &mut black,
            &mut std::io::sink(),
            RunOptions {
                max_turns: 2,
                show_board: false,
            },
        )
        .unwrap();
        assert_eq!(report, GameReport { outcome: None, plies: 2 });
    }

    #[test]
    fn human_against_random() {
        // Red's only man steps forward once; Black then has no men to move.
        let game = Game::from_diagram("8/8/8/8/8/r7/8/8 r").unwrap();
        let mut human = HumanContestant::new(Cursor::new("h6\n1\n"), Vec::new());
        let mut black = RandomContestant::new(StdRng::seed_from_u64(0));
        let mut out = Vec::new();
        let report = run_game(
            game,
            &mut human,
            &mut black,
            &mut out,
            RunOptions {
                max_turns: 10,
                show_board: true,
            },
        )
        .unwrap();
        assert_eq!(report.outcome, Some(GameOutcome::Stalled(Player::Black)));
        assert_eq!(report.plies, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Red plays"));
        assert!(text.contains("Game over! Black has no moves left."));
    }

    #[test]
    fn self_play_is_reproducible() {
        let a = self_play(5, 500, 42).unwrap();
        let b = self_play(5, 500, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.games, 5);
        assert_eq!(a.red_stalled + a.black_stalled, 5);
        assert_eq!(a.unfinished, 0);
        assert!(a.longest_game <= 168);
    }

    #[test]
    fn summary_serializes() {
        let summary = self_play(1, 500, 1).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 1);
        assert_eq!(json["games"], 1);
        assert!(json.get("longest_game").is_some());
    }
}

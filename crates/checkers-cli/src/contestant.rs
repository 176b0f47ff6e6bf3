//! Players that choose turns for one side of a game.

use checkers_core::Turn;
use checkers_engine::{Game, GameError};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while a contestant picks or plays a turn.
#[derive(Error, Debug)]
pub enum PlayError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream ended while waiting for a choice.
    #[error("input closed")]
    InputClosed,
    /// The engine rejected the chosen turn.
    #[error("rejected turn: {0}")]
    Game(#[from] GameError),
}

/// The kinds of contestant that can be configured for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContestantKind {
    /// Moves are typed at the terminal.
    Human,
    /// Moves are picked uniformly at random.
    Random,
}

/// Something that picks turns for the active player.
pub trait Contestant {
    /// A short name for logs and summaries.
    fn name(&self) -> &str;

    /// Picks a turn for the active player of `game`, or `None` if it has none.
    fn choose_turn(&mut self, game: &Game) -> Result<Option<Turn>, PlayError>;

    /// Returns true if choices should be announced, since nobody typed them.
    fn is_automatic(&self) -> bool {
        true
    }
}

/// Plays a uniformly random piece, then a uniformly random move for it.
#[derive(Debug)]
pub struct RandomContestant<R> {
    rng: R,
}

impl<R: Rng> RandomContestant<R> {
    /// Creates a random contestant drawing from `rng`.
    pub fn new(rng: R) -> Self {
        RandomContestant { rng }
    }
}

impl<R: Rng> Contestant for RandomContestant<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_turn(&mut self, game: &Game) -> Result<Option<Turn>, PlayError> {
        let locations = game.movable_locations();
        let origin = match locations.choose(&mut self.rng) {
            Some(&origin) => origin,
            None => return Ok(None),
        };
        let moves = game.legal_moves(origin)?;
        Ok(moves
            .choose(&mut self.rng)
            .map(|m| Turn::new(origin, game.active_player(), m.clone())))
    }
}

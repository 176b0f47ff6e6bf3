//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, which keeps [`Game`](crate::Game)
//! and drivers independent of the concrete rules they play by.

mod simplified;

pub use simplified::SimplifiedCheckers;

use crate::movegen::{Immobility, MoveError};
use crate::Board;
use checkers_core::{Location, Move, Player};
use std::fmt;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The given player was to move and had no movable piece, either because
    /// all of its men were captured or because every one is blocked.
    Stalled(Player),
}

impl GameOutcome {
    /// Returns the player who could not move.
    pub const fn stalled_player(self) -> Player {
        match self {
            GameOutcome::Stalled(player) => player,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Stalled(player) => write!(f, "{} has no moves left", player),
        }
    }
}

/// Trait for implementing checkers rule sets.
///
/// # Example
///
/// ```
/// use checkers_core::Player;
/// use checkers_engine::{RuleSet, SimplifiedCheckers};
///
/// let board = SimplifiedCheckers.initial_board();
/// let movable = SimplifiedCheckers.movable_locations(&board, Player::Red);
/// assert_eq!(movable.len(), 4);
/// ```
pub trait RuleSet {
    /// Returns the starting board.
    fn initial_board(&self) -> Board;

    /// Returns the player who moves first.
    fn first_player(&self) -> Player;

    /// Returns every location holding a piece `player` may move.
    fn movable_locations(&self, board: &Board, player: Player) -> Vec<Location>;

    /// Returns why the piece at `location` may not move, or `None` if it may.
    fn movability(&self, board: &Board, player: Player, location: Option<Location>)
        -> Option<Immobility>;

    /// Returns the moves available to the piece at `location`.
    ///
    /// Only meaningful once [`movability`](RuleSet::movability) has approved
    /// the piece.
    fn legal_moves(&self, board: &Board, player: Player, location: Location) -> Vec<Move>;

    /// Applies a move, returning the new board.
    fn apply_move(
        &self,
        board: &Board,
        player: Player,
        origin: Location,
        m: &Move,
    ) -> Result<Board, MoveError>;

    /// Returns the outcome if `player`, being the one to move, cannot.
    fn outcome(&self, board: &Board, player: Player) -> Option<GameOutcome>;

    /// Returns true if the game is over with `player` to move.
    fn is_game_over(&self, board: &Board, player: Player) -> bool {
        self.outcome(board, player).is_some()
    }
}

//! Rules engine for simplified checkers.
//!
//! This crate provides:
//! - [`Board`] - immutable 8x8 board with bounds-checked lookup
//! - [`movegen`] - simple moves, multi-jump capture sequences, and the
//!   forced-capture legality layer
//! - [`RuleSet`] - trait for the rules a [`Game`] is played by
//! - [`Game`] - turn flow and game-over detection
//!
//! # Example
//!
//! ```
//! use checkers_engine::Game;
//!
//! let mut game = Game::new();
//! let turn = game.legal_turns().remove(0);
//! game.play_turn(&turn).unwrap();
//! assert_eq!(game.ply_count(), 1);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError};
pub use movegen::{
    apply_jump_sequence, apply_move, apply_simple_move, apply_turn, board_has_any_capture_for,
    can_capture_from, legal_moves_for, legal_turns, locations_with_any_legal_move, movability,
    possible_jump_sequences, possible_simple_moves, Immobility, JumpOutcome, MoveError,
};
pub use rules::{GameOutcome, RuleSet, SimplifiedCheckers};

//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Player`] and [`Square`] for sides and board contents
//! - [`Location`] for board coordinates and their `h6`-style notation
//! - [`Move`], [`MoveDirection`] and [`Turn`] for move representation
//! - Board diagram parsing

mod diagram;
mod location;
mod mov;
mod player;
mod square;

pub use diagram::{DiagramError, DiagramParser, Rows};
pub use location::{Location, LocationError};
pub use mov::{Move, MoveDirection, Turn};
pub use player::Player;
pub use square::Square;

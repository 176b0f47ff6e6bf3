//! Terminal front end for the checkers engine.
//!
//! # Modules
//!
//! - [`config`] - `checkers.toml` loading
//! - [`contestant`] - the [`Contestant`](contestant::Contestant) seam and the
//!   random player
//! - [`human`] - interactive player reading moves from a terminal
//! - [`session`] - game loop and batch self-play

pub mod config;
pub mod contestant;
pub mod human;
pub mod session;

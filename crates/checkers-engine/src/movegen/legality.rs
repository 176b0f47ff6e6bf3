//! Which pieces a player is allowed to move.

use super::{board_has_any_capture_for, can_capture_from, possible_simple_moves};
use crate::Board;
use checkers_core::{Location, Player, Square};
use std::fmt;

/// Why the piece at a location cannot be moved this turn.
///
/// Variants are checked in declaration order; the first that applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Immobility {
    /// No location was selected.
    NoSelection,
    /// The location is not on the board.
    OffBoard,
    /// Nothing stands on the square.
    EmptySquare,
    /// The piece belongs to the other player.
    NotOwnPiece(Player),
    /// The player has a capture elsewhere and this piece cannot capture.
    MustCapture(Player),
    /// The piece has neither captures nor simple moves.
    NoLegalMoves,
}

impl Immobility {
    /// Returns a stable identifier for this reason, suitable for lookups.
    pub const fn code(self) -> &'static str {
        match self {
            Immobility::NoSelection => "no-selection",
            Immobility::OffBoard => "off-board",
            Immobility::EmptySquare => "empty-square",
            Immobility::NotOwnPiece(_) => "not-own-piece",
            Immobility::MustCapture(_) => "must-capture",
            Immobility::NoLegalMoves => "no-legal-moves",
        }
    }
}

impl fmt::Display for Immobility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Immobility::NoSelection => write!(f, "No square was selected."),
            Immobility::OffBoard => write!(f, "That square is not on the board."),
            Immobility::EmptySquare => write!(f, "That square is empty."),
            Immobility::NotOwnPiece(player) => {
                write!(f, "That piece doesn't belong to {}.", player)
            }
            Immobility::MustCapture(player) => write!(
                f,
                "{} must jump, and that piece is not a valid jumper.",
                player
            ),
            Immobility::NoLegalMoves => write!(f, "That piece has no valid moves."),
        }
    }
}

/// Returns why the piece at `location` may not be moved by `player`, or
/// `None` if it may.
pub fn movability(location: Option<Location>, player: Player, board: &Board) -> Option<Immobility> {
    let location = match location {
        Some(location) => location,
        None => return Some(Immobility::NoSelection),
    };
    movability_given(location, player, board, || {
        board_has_any_capture_for(player, board)
    })
}

/// Returns every location holding a piece `player` may move, in row-major
/// order. An empty result means `player` cannot move and the game is over.
pub fn locations_with_any_legal_move(player: Player, board: &Board) -> Vec<Location> {
    let must_capture = board_has_any_capture_for(player, board);
    board
        .pieces(player)
        .filter(|&location| movability_given(location, player, board, || must_capture).is_none())
        .collect()
}

/// The checks behind [`movability`], with the board-wide capture scan
/// supplied by the caller so a full-board sweep only computes it once.
fn movability_given<F>(
    location: Location,
    player: Player,
    board: &Board,
    must_capture: F,
) -> Option<Immobility>
where
    F: FnOnce() -> bool,
{
    let square = match board.square_at(location) {
        Some(square) => square,
        None => return Some(Immobility::OffBoard),
    };
    if square == Square::Empty {
        return Some(Immobility::EmptySquare);
    }
    if square != player.own_square() {
        return Some(Immobility::NotOwnPiece(player));
    }

    let captures = can_capture_from(location, player, board);
    if !captures && must_capture() {
        return Some(Immobility::MustCapture(player));
    }
    if !captures && possible_simple_moves(location, player, board).is_empty() {
        return Some(Immobility::NoLegalMoves);
    }
    None
}

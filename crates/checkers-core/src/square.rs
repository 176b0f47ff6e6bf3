//! Contents of a single board cell.

use crate::Player;

/// What occupies a board square: nothing, or one player's man.
///
/// Men carry no identity; all of a player's pieces are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Square {
    #[default]
    Empty = 0,
    Red = 1,
    Black = 2,
}

impl Square {
    /// Returns the player owning the piece on this square, if any.
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Red => Some(Player::Red),
            Square::Black => Some(Player::Black),
        }
    }

    /// Returns true if no piece occupies this square.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the character used when rendering a board ('X', 'O' or ' ').
    pub const fn to_display_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Red => 'X',
            Square::Black => 'O',
        }
    }

    /// Parses a diagram piece character ('r' or 'b').
    pub const fn from_diagram_char(c: char) -> Option<Square> {
        match Player::from_char(c) {
            Some(player) => Some(player.own_square()),
            None => None,
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_char())
    }
}

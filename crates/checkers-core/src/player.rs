//! Player representation.

use crate::Square;

/// The two sides of a checkers game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Black = 1,
}

impl Player {
    /// Both players, Red first.
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    /// Returns the opposing player.
    #[inline]
    pub const fn enemy(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Returns the square contents representing this player's men.
    #[inline]
    pub const fn own_square(self) -> Square {
        match self {
            Player::Red => Square::Red,
            Player::Black => Square::Black,
        }
    }

    /// Returns the row direction this player advances in (-1 for Red, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// Returns the diagram character for this player ('r' or 'b').
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Player::Red => 'r',
            Player::Black => 'b',
        }
    }

    /// Parses a player from its diagram character.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Player::Red),
            'b' => Some(Player::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

//! Move representation.

use crate::{Location, Player};
use std::fmt;

/// Horizontal component of a diagonal step.
///
/// Combined with a player's forward row direction it names one of the two
/// diagonals a man may move along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Both directions, in the order move generation tries them.
    pub const ALL: [MoveDirection; 2] = [MoveDirection::Left, MoveDirection::Right];

    /// Returns the column delta of one step (-1 for Left, +1 for Right).
    #[inline]
    pub const fn delta(self) -> i8 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }

    /// Returns the location one diagonal step from `from` for `player`.
    #[inline]
    pub const fn step(self, from: Location, player: Player) -> Location {
        from.offset(self.delta(), player.forward())
    }

    /// Returns the location two diagonal steps from `from` for `player`.
    #[inline]
    pub const fn leap(self, from: Location, player: Player) -> Location {
        from.offset(self.delta() * 2, player.forward() * 2)
    }

    const fn to_char(self) -> char {
        match self {
            MoveDirection::Left => 'L',
            MoveDirection::Right => 'R',
        }
    }
}

/// A checkers move, relative to an origin square and the player making it.
///
/// A move never carries a board reference; it is always interpreted against
/// the board it is applied to.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// A single diagonal step onto an empty square.
    Simple(MoveDirection),
    /// One or more captures, each leaping in the given direction from where
    /// the previous one landed.
    Jumps(Vec<MoveDirection>),
}

impl Move {
    /// Returns true if this move captures at least one piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Jumps(_))
    }

    /// Returns the number of pieces this move captures.
    pub fn capture_count(&self) -> usize {
        match self {
            Move::Simple(_) => 0,
            Move::Jumps(jumps) => jumps.len(),
        }
    }

    /// Returns every square the moving piece occupies, starting with `origin`.
    pub fn path(&self, origin: Location, player: Player) -> Vec<Location> {
        match self {
            Move::Simple(direction) => vec![origin, direction.step(origin, player)],
            Move::Jumps(jumps) => {
                let mut path = Vec::with_capacity(jumps.len() + 1);
                path.push(origin);
                let mut at = origin;
                for jump in jumps {
                    at = jump.leap(at, player);
                    path.push(at);
                }
                path
            }
        }
    }

    /// Returns the square the moving piece ends on.
    pub fn destination(&self, origin: Location, player: Player) -> Location {
        match self {
            Move::Simple(direction) => direction.step(origin, player),
            Move::Jumps(jumps) => jumps.iter().fold(origin, |at, jump| jump.leap(at, player)),
        }
    }

    /// Describes the move as a path of squares, e.g. `"d6 -> b4 -> d2"`.
    pub fn describe(&self, origin: Location, player: Player) -> String {
        self.path(origin, player)
            .iter()
            .map(|location| location.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// A move together with the square it starts from and the player making it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub origin: Location,
    pub player: Player,
    pub mov: Move,
}

impl Turn {
    /// Creates a new turn.
    pub fn new(origin: Location, player: Player, mov: Move) -> Self {
        Turn {
            origin,
            player,
            mov,
        }
    }

    /// Returns the square the moving piece ends on.
    pub fn destination(&self) -> Location {
        self.mov.destination(self.origin, self.player)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mov.describe(self.origin, self.player))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple(direction) => write!(f, "{}", direction.to_char()),
            Move::Jumps(jumps) => {
                for jump in jumps {
                    write!(f, "x{}", jump.to_char())?;
                }
                Ok(())
            }
        }
    }
}

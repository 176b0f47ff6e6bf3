//! Immutable board representation.

use checkers_core::{DiagramError, DiagramParser, Location, Player, Rows, Square};
use std::fmt;

/// An 8x8 grid of squares, row-major.
///
/// Boards are values: every move produces a new `Board` and never touches the
/// one it was derived from. Only dark squares (`column + row` odd) are ever
/// occupied by the starting layout, diagram parsing and the move rules.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Rows,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            rows: [[Square::Empty; 8]; 8],
        }
    }

    /// Creates the starting layout: Black on the dark squares of rows 0-2,
    /// Red on the dark squares of rows 5-7.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for location in Location::all().filter(|l| l.is_dark()) {
            let square = match location.row {
                0..=2 => Square::Black,
                5..=7 => Square::Red,
                _ => Square::Empty,
            };
            board.rows[location.row as usize][location.column as usize] = square;
        }
        board
    }

    /// Creates a board from a diagram placement string.
    pub fn from_placement(placement: &str) -> Result<Self, DiagramError> {
        Ok(Board {
            rows: DiagramParser::parse_placement(placement)?,
        })
    }

    pub(crate) const fn from_rows(rows: Rows) -> Self {
        Board { rows }
    }

    /// Returns the placement part of this board's diagram.
    pub fn to_placement(&self) -> String {
        DiagramParser::placement(&self.rows)
    }

    /// Returns the raw squares, indexed `[row][column]`.
    pub const fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Returns the contents of `location`, or `None` if it is off the board.
    #[inline]
    pub fn square_at(&self, location: Location) -> Option<Square> {
        if location.is_on_board() {
            Some(self.rows[location.row as usize][location.column as usize])
        } else {
            None
        }
    }

    /// Returns true if `location` is on the board and holds `query`.
    ///
    /// Off-board locations match nothing, not even [`Square::Empty`], so a
    /// step past the edge is never a valid destination.
    #[inline]
    pub fn square_is(&self, location: Location, query: Square) -> bool {
        self.square_at(location) == Some(query)
    }

    /// Returns a copy of this board with the given squares replaced.
    ///
    /// Off-board locations are ignored.
    pub fn with_squares<I>(&self, changes: I) -> Board
    where
        I: IntoIterator<Item = (Location, Square)>,
    {
        let mut next = *self;
        for (location, square) in changes {
            if location.is_on_board() {
                next.rows[location.row as usize][location.column as usize] = square;
            }
        }
        next
    }

    /// Iterates over every location holding one of `player`'s men.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Location> + '_ {
        let own = player.own_square();
        Location::all().filter(move |&location| self.square_is(location, own))
    }

    /// Counts `player`'s men.
    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// Renders one line per row (`"6|X X X X "`) followed by the column letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows.iter().enumerate() {
            write!(f, "{}|", row_idx + 1)?;
            for square in row {
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        let columns: String = Location::COLUMN_CHARS.iter().collect();
        write!(f, "  {}", columns)
    }
}

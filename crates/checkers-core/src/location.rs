//! Board coordinates and their textual notation.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a location such as `"g6"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("expected a column letter and a row digit, got {0:?}")]
    InvalidLength(String),

    #[error("invalid column '{0}': expected one of h, g, f, e, d, c, b, a")]
    InvalidColumn(char),

    #[error("invalid row '{0}': expected a digit from 1 to 8")]
    InvalidRow(char),
}

/// A (column, row) coordinate.
///
/// Locations carry no validity of their own: a step off the edge of the board
/// produces a perfectly good `Location` that simply matches nothing when looked
/// up. Columns are printed as `h` through `a` left to right, rows as `1`
/// through `8` top to bottom.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub column: i8,
    pub row: i8,
}

impl Location {
    /// Number of columns and rows on the board.
    pub const SIZE: i8 = 8;

    /// Column letters, indexed by internal column.
    pub const COLUMN_CHARS: [char; 8] = ['h', 'g', 'f', 'e', 'd', 'c', 'b', 'a'];

    /// Creates a location; no bounds checking is performed.
    #[inline]
    pub const fn new(column: i8, row: i8) -> Self {
        Location { column, row }
    }

    /// Returns this location shifted by the given column and row deltas.
    ///
    /// Coordinates saturate, so a location far off the board stays off it.
    #[inline]
    pub const fn offset(self, columns: i8, rows: i8) -> Self {
        Location {
            column: self.column.saturating_add(columns),
            row: self.row.saturating_add(rows),
        }
    }

    /// Returns true if the location lies on the 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.column >= 0 && self.column < Self::SIZE && self.row >= 0 && self.row < Self::SIZE
    }

    /// Returns true for playable squares, where `column + row` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.column as i16 + self.row as i16).rem_euclid(2) == 1
    }

    /// Iterates over every on-board location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |column| Location::new(column, row)))
    }

    /// Parses a location such as `"g6"`, ignoring surrounding whitespace.
    pub fn from_notation(s: &str) -> Result<Self, LocationError> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (column_char, row_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => (c, r),
            _ => return Err(LocationError::InvalidLength(trimmed.to_string())),
        };

        let column = Self::COLUMN_CHARS
            .iter()
            .position(|&c| c == column_char)
            .ok_or(LocationError::InvalidColumn(column_char))?;
        let row = match row_char.to_digit(10) {
            Some(d @ 1..=8) => d - 1,
            _ => return Err(LocationError::InvalidRow(row_char)),
        };

        Ok(Location::new(column as i8, row as i8))
    }

    /// Returns the notation for this location, or `None` if it is off the board.
    pub fn to_notation(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let column = Self::COLUMN_CHARS[self.column as usize];
        Some(format!("{}{}", column, self.row + 1))
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}, {})", self.column, self.row)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_notation() {
            Some(notation) => write!(f, "{}", notation),
            None => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

//! Board diagram parsing and serialization.
//!
//! A diagram has the form `<placement> <active>`. The placement lists the
//! eight rows separated by `/`, row `1` first, each row reading from column
//! `h` to column `a`. Within a row `r` is a Red man, `b` a Black man and a
//! digit is a run of empty squares. The active player is `r` or `b`.

use crate::{Location, Player, Square};
use thiserror::Error;

/// The squares of a board, indexed `[row][column]`.
pub type Rows = [[Square; 8]; 8];

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("invalid active player: expected 'r' or 'b', got '{0}'")]
    InvalidActivePlayer(String),

    #[error("piece on light square {0}")]
    LightSquareOccupied(Location),
}

/// Parsed diagram data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramParser {
    /// Board contents, indexed `[row][column]`.
    pub rows: Rows,
    /// The player to move.
    pub active_player: Player,
}

impl DiagramParser {
    /// The starting layout with Red to move.
    pub const STARTPOS: &'static str =
        "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1 r";

    /// Parses a full diagram (placement and active player).
    pub fn parse(diagram: &str) -> Result<Self, DiagramError> {
        let parts: Vec<&str> = diagram.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(DiagramError::InvalidPartCount(parts.len()));
        }

        let rows = Self::parse_placement(parts[0])?;

        let mut active = parts[1].chars();
        let active_player = match (active.next().and_then(Player::from_char), active.next()) {
            (Some(player), None) => player,
            _ => return Err(DiagramError::InvalidActivePlayer(parts[1].to_string())),
        };

        Ok(DiagramParser {
            rows,
            active_player,
        })
    }

    /// Parses only the placement part of a diagram.
    pub fn parse_placement(placement: &str) -> Result<Rows, DiagramError> {
        let row_strs: Vec<&str> = placement.split('/').collect();
        if row_strs.len() != 8 {
            return Err(DiagramError::InvalidRowCount(row_strs.len()));
        }

        let mut rows = [[Square::Empty; 8]; 8];
        for (row, row_str) in row_strs.iter().enumerate() {
            let mut column = 0usize;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    column += run as usize;
                } else if let Some(square) = Square::from_diagram_char(c) {
                    if column < 8 {
                        let location = Location::new(column as i8, row as i8);
                        if !location.is_dark() {
                            return Err(DiagramError::LightSquareOccupied(location));
                        }
                        rows[row][column] = square;
                    }
                    column += 1;
                } else {
                    return Err(DiagramError::InvalidRow {
                        row: row + 1,
                        reason: format!("invalid character '{}'", c),
                    });
                }
            }
            if column != 8 {
                return Err(DiagramError::InvalidRow {
                    row: row + 1,
                    reason: format!("{} squares, expected 8", column),
                });
            }
        }

        Ok(rows)
    }

    /// Serializes board contents as a placement string.
    pub fn placement(rows: &Rows) -> String {
        let mut out = String::with_capacity(72);
        for (row_idx, row) in rows.iter().enumerate() {
            if row_idx > 0 {
                out.push('/');
            }
            let mut empty_run = 0;
            for square in row {
                match square.owner() {
                    None => empty_run += 1,
                    Some(player) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(player.to_char());
                    }
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
        }
        out
    }

    /// Converts the parsed diagram back to a diagram string.
    pub fn to_diagram(&self) -> String {
        format!(
            "{} {}",
            Self::placement(&self.rows),
            self.active_player.to_char()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let diagram = DiagramParser::parse(DiagramParser::STARTPOS).unwrap();
        assert_eq!(diagram.active_player, Player::Red);
        assert_eq!(diagram.rows[0][1], Square::Black);
        assert_eq!(diagram.rows[0][0], Square::Empty);
        assert_eq!(diagram.rows[5][0], Square::Red);
        assert!(diagram.rows[3].iter().all(|s| s.is_empty()));
    }

    #[test]
    fn roundtrip() {
        let original = "8/8/8/r7/1b6/8/8/8 b";
        let parsed = DiagramParser::parse(original).unwrap();
        assert_eq!(parsed.to_diagram(), original);
        assert_eq!(parsed.rows[3][0], Square::Red);
        assert_eq!(parsed.rows[4][1], Square::Black);
    }

    #[test]
    fn startpos_roundtrip() {
        let parsed = DiagramParser::parse(DiagramParser::STARTPOS).unwrap();
        assert_eq!(parsed.to_diagram(), DiagramParser::STARTPOS);
    }

    #[test]
    fn invalid_part_count() {
        assert_eq!(
            DiagramParser::parse("8/8/8/8/8/8/8/8"),
            Err(DiagramError::InvalidPartCount(1))
        );
        assert_eq!(
            DiagramParser::parse("8/8/8/8/8/8/8/8 r extra"),
            Err(DiagramError::InvalidPartCount(3))
        );
    }

    #[test]
    fn invalid_active_player() {
        assert!(matches!(
            DiagramParser::parse("8/8/8/8/8/8/8/8 w"),
            Err(DiagramError::InvalidActivePlayer(_))
        ));
        assert!(matches!(
            DiagramParser::parse("8/8/8/8/8/8/8/8 rb"),
            Err(DiagramError::InvalidActivePlayer(_))
        ));
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            DiagramParser::parse("8/8/8/8/8/8/8 r"),
            Err(DiagramError::InvalidRowCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            DiagramParser::parse("8/8/8/8/8/8/8/1x6 r"),
            Err(DiagramError::InvalidRow { row: 8, .. })
        ));
        assert!(matches!(
            DiagramParser::parse("8/8/8/9/8/8/8/8 r"),
            Err(DiagramError::InvalidRow { row: 4, .. })
        ));
    }

    #[test]
    fn wrong_row_width() {
        assert!(matches!(
            DiagramParser::parse("8/7/8/8/8/8/8/8 r"),
            Err(DiagramError::InvalidRow { row: 2, .. })
        ));
        assert!(matches!(
            DiagramParser::parse("8/8/8/8/8/8/8/r1r1r1r1r r"),
            Err(DiagramError::InvalidRow { row: 8, .. })
        ));
    }

    #[test]
    fn light_square_rejected() {
        assert_eq!(
            DiagramParser::parse("b7/8/8/8/8/8/8/8 r"),
            Err(DiagramError::LightSquareOccupied(Location::new(0, 0)))
        );
    }

    #[test]
    fn error_display() {
        let err = DiagramError::LightSquareOccupied(Location::new(0, 0));
        assert_eq!(err.to_string(), "piece on light square h1");

        let err = DiagramError::InvalidRow {
            row: 3,
            reason: "bad".to_string(),
        };
        assert!(err.to_string().contains("bad"));
    }
}

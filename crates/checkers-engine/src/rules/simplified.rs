//! Simplified checkers rules.

use super::{GameOutcome, RuleSet};
use crate::movegen::{self, Immobility, MoveError};
use crate::Board;
use checkers_core::{Location, Move, Player};

/// Checkers without kings.
///
/// - Men move one square diagonally forward onto an empty square
/// - Captures leap forward over an adjacent enemy man onto an empty square
/// - Capturing is mandatory, and a capturing man keeps capturing while it can
/// - A player who cannot move has lost; Red moves first
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedCheckers;

impl RuleSet for SimplifiedCheckers {
    fn initial_board(&self) -> Board {
        Board::starting()
    }

    fn first_player(&self) -> Player {
        Player::Red
    }

    fn movable_locations(&self, board: &Board, player: Player) -> Vec<Location> {
        movegen::locations_with_any_legal_move(player, board)
    }

    fn movability(
        &self,
        board: &Board,
        player: Player,
        location: Option<Location>,
    ) -> Option<Immobility> {
        movegen::movability(location, player, board)
    }

    fn legal_moves(&self, board: &Board, player: Player, location: Location) -> Vec<Move> {
        movegen::legal_moves_for(location, player, board)
    }

    fn apply_move(
        &self,
        board: &Board,
        player: Player,
        origin: Location,
        m: &Move,
    ) -> Result<Board, MoveError> {
        movegen::apply_move(m, origin, player, board)
    }

    fn outcome(&self, board: &Board, player: Player) -> Option<GameOutcome> {
        if self.movable_locations(board, player).is_empty() {
            Some(GameOutcome::Stalled(player))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board() {
        assert_eq!(SimplifiedCheckers.initial_board(), Board::starting());
        assert_eq!(SimplifiedCheckers.first_player(), Player::Red);
    }

    #[test]
    fn starting_position_is_not_over() {
        let board = SimplifiedCheckers.initial_board();
        assert_eq!(SimplifiedCheckers.outcome(&board, Player::Red), None);
        assert!(!SimplifiedCheckers.is_game_over(&board, Player::Black));
    }

    #[test]
    fn player_without_pieces_is_stalled() {
        let board = Board::from_placement("8/8/8/8/8/r1r1r1r1/8/8").unwrap();
        assert_eq!(
            SimplifiedCheckers.outcome(&board, Player::Black),
            Some(GameOutcome::Stalled(Player::Black))
        );
        assert!(!SimplifiedCheckers.is_game_over(&board, Player::Red));
    }

    #[test]
    fn player_with_blocked_pieces_is_stalled() {
        // Red's only man sits on row 1 with nowhere forward to go.
        let board = Board::from_placement("1r6/8/8/8/8/8/8/b7").unwrap();
        let outcome = SimplifiedCheckers.outcome(&board, Player::Red);
        assert_eq!(outcome, Some(GameOutcome::Stalled(Player::Red)));
        assert_eq!(outcome.unwrap().to_string(), "Red has no moves left");
    }
}

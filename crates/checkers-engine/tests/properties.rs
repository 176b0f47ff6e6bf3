//! Property tests for the rules engine.
//!
//! Boards come from two sources: arbitrary placements on the dark squares,
//! and positions reached by random play from the starting layout.

use checkers_core::{Location, Move, Player, Square};
use checkers_engine::{
    apply_move, board_has_any_capture_for, can_capture_from, legal_moves_for,
    locations_with_any_legal_move, possible_jump_sequences, Board, Game,
};
use proptest::prelude::*;
use proptest::sample::Index;

/// Longest possible game: 24 men, each able to advance at most 7 rows.
const MAX_PLIES: usize = 24 * 7;

fn arbitrary_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        2 => Just(Square::Empty),
        1 => Just(Square::Red),
        1 => Just(Square::Black),
    ]
}

fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(arbitrary_square(), 32).prop_map(|squares| {
        let dark = Location::all().filter(|l| l.is_dark());
        Board::empty().with_squares(dark.zip(squares))
    })
}

fn arbitrary_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Red), Just(Player::Black)]
}

/// Plays random turns (uniform piece, then uniform move) and returns every
/// position reached, including the final one.
fn random_game(choices: &[(Index, Index)]) -> Vec<(Board, Player)> {
    let mut game = Game::new();
    let mut positions = vec![(*game.board(), game.active_player())];
    for (piece, mov) in choices {
        if game.is_game_over() {
            break;
        }
        let locations = game.movable_locations();
        let origin = *piece.get(&locations);
        let moves = game.legal_moves(origin).unwrap();
        game.play(origin, mov.get(&moves)).unwrap();
        positions.push((*game.board(), game.active_player()));
    }
    positions
}

fn check_position(board: &Board, player: Player) -> Result<(), TestCaseError> {
    let must_capture = board_has_any_capture_for(player, board);
    let movable = locations_with_any_legal_move(player, board);

    for &origin in &movable {
        let moves = legal_moves_for(origin, player, board);
        prop_assert!(!moves.is_empty());
        if must_capture {
            prop_assert!(moves.iter().all(Move::is_capture), "{} must capture", origin);
        }

        for m in &moves {
            let next = apply_move(m, origin, player, board);
            prop_assert!(next.is_ok(), "{:?} from {} rejected: {:?}", m, origin, next);
            let next = next.unwrap();

            prop_assert_eq!(next.piece_count(player), board.piece_count(player));
            prop_assert_eq!(
                next.piece_count(player.enemy()),
                board.piece_count(player.enemy()) - m.capture_count()
            );

            let destination = m.destination(origin, player);
            prop_assert!(next.square_is(destination, player.own_square()));
            prop_assert!(next.square_is(origin, Square::Empty));
            if m.is_capture() {
                prop_assert!(!can_capture_from(destination, player, &next));
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn enumerated_moves_are_sound(board in arbitrary_board(), player in arbitrary_player()) {
        check_position(&board, player)?;
    }

    #[test]
    fn capture_detection_agrees_with_search(board in arbitrary_board(), player in arbitrary_player()) {
        for location in board.pieces(player) {
            prop_assert_eq!(
                can_capture_from(location, player, &board),
                !possible_jump_sequences(location, player, &board).is_empty()
            );
        }
    }

    #[test]
    fn forced_capture_limits_movable_pieces(board in arbitrary_board(), player in arbitrary_player()) {
        let movable = locations_with_any_legal_move(player, &board);
        if board_has_any_capture_for(player, &board) {
            prop_assert!(!movable.is_empty());
            for location in movable {
                prop_assert!(can_capture_from(location, player, &board));
            }
        }
    }

    #[test]
    fn random_play_stays_legal(choices in prop::collection::vec((any::<Index>(), any::<Index>()), MAX_PLIES)) {
        for (board, player) in random_game(&choices) {
            prop_assert!(Location::all()
                .filter(|l| !l.is_dark())
                .all(|l| board.square_is(l, Square::Empty)));
            check_position(&board, player)?;
        }
    }

    #[test]
    fn random_play_terminates(choices in prop::collection::vec((any::<Index>(), any::<Index>()), MAX_PLIES + 1)) {
        let positions = random_game(&choices);
        let (board, player) = positions[positions.len() - 1];
        prop_assert!(locations_with_any_legal_move(player, &board).is_empty());
    }
}

#[test]
fn starting_board_counts() {
    let board = Board::starting();
    assert_eq!(board.piece_count(Player::Black), 12);
    assert_eq!(board.piece_count(Player::Red), 12);
    for location in board.pieces(Player::Black) {
        assert!(location.row <= 2);
    }
    for location in board.pieces(Player::Red) {
        assert!(location.row >= 5);
    }
}

#[test]
fn single_capture_scenario() {
    // Red on e5, Black on d4 and an empty c3 beyond it.
    let board = Board::empty().with_squares([
        (Location::new(3, 4), Square::Red),
        (Location::new(4, 3), Square::Black),
    ]);
    let sequences = possible_jump_sequences(Location::new(3, 4), Player::Red, &board);
    assert_eq!(sequences.len(), 1);
    assert_eq!(sequences[0].len(), 1);

    let next = apply_move(
        &Move::Jumps(sequences[0].clone()),
        Location::new(3, 4),
        Player::Red,
        &board,
    )
    .unwrap();
    assert!(next.square_is(Location::new(5, 2), Square::Red));
    assert!(next.square_is(Location::new(4, 3), Square::Empty));
}

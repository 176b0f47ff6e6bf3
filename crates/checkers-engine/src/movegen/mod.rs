//! Move application and legal move generation.
//!
//! Everything here is a pure function of a [`Board`] and a [`Player`]; no
//! side state (such as "a capture is in progress") is kept between calls.
//! Legality is derived from board contents alone.

mod legality;
pub mod perft;

pub use legality::{locations_with_any_legal_move, movability, Immobility};

use crate::Board;
use checkers_core::{Location, Move, MoveDirection, Player, Square, Turn};
use thiserror::Error;

/// Why a move could not be applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The step or capture cannot be performed: the destination is off the
    /// board or occupied, or the jumped square does not hold an enemy man.
    #[error("illegal move")]
    IllegalMove,
    /// The captures so far are valid, but the piece must keep capturing from
    /// where it landed.
    #[error("more captures required")]
    MoreCapturesRequired,
}

/// Result of applying a jump sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// A complete capture sequence.
    Applied(Board),
    /// Some jump in the sequence is not possible.
    Illegal,
    /// Every jump is possible but the piece can still capture from its final
    /// square. Carries the board as it stands after the captures so far.
    MoreCapturesRequired(Board),
}

impl JumpOutcome {
    /// Converts the outcome into the result a caller of [`apply_move`] sees.
    pub fn into_result(self) -> Result<Board, MoveError> {
        match self {
            JumpOutcome::Applied(board) => Ok(board),
            JumpOutcome::Illegal => Err(MoveError::IllegalMove),
            JumpOutcome::MoreCapturesRequired(_) => Err(MoveError::MoreCapturesRequired),
        }
    }
}

/// Moves the man at `origin` one square diagonally forward in `direction`.
///
/// Fails with [`MoveError::IllegalMove`] unless the destination is an empty
/// on-board square.
pub fn apply_simple_move(
    direction: MoveDirection,
    origin: Location,
    player: Player,
    board: &Board,
) -> Result<Board, MoveError> {
    let destination = direction.step(origin, player);
    if !board.square_is(destination, Square::Empty) {
        return Err(MoveError::IllegalMove);
    }
    Ok(board.with_squares([
        (destination, player.own_square()),
        (origin, Square::Empty),
    ]))
}

/// Applies a sequence of captures made by the man at `origin`.
///
/// Each jump must leap over an enemy man onto an empty square, starting from
/// where the previous jump landed. Captured men are removed together once the
/// whole sequence has been validated against the original board. A sequence
/// after which the piece could still capture is not complete and yields
/// [`JumpOutcome::MoreCapturesRequired`].
pub fn apply_jump_sequence(
    jumps: &[MoveDirection],
    origin: Location,
    player: Player,
    board: &Board,
) -> JumpOutcome {
    if jumps.is_empty() {
        return JumpOutcome::Illegal;
    }

    let enemy = player.enemy().own_square();
    let mut jumper = origin;
    let mut captured = Vec::with_capacity(jumps.len());

    for &jump in jumps {
        let victim = jump.step(jumper, player);
        if !board.square_is(victim, enemy) {
            return JumpOutcome::Illegal;
        }
        let landing = jump.leap(jumper, player);
        if !board.square_is(landing, Square::Empty) {
            return JumpOutcome::Illegal;
        }
        captured.push(victim);
        jumper = landing;
    }

    let next = board.with_squares(
        captured
            .into_iter()
            .map(|victim| (victim, Square::Empty))
            .chain([(origin, Square::Empty), (jumper, player.own_square())]),
    );

    if can_capture_from(jumper, player, &next) {
        JumpOutcome::MoreCapturesRequired(next)
    } else {
        JumpOutcome::Applied(next)
    }
}

/// Applies either kind of move.
pub fn apply_move(
    m: &Move,
    origin: Location,
    player: Player,
    board: &Board,
) -> Result<Board, MoveError> {
    match m {
        Move::Simple(direction) => apply_simple_move(*direction, origin, player, board),
        Move::Jumps(jumps) => apply_jump_sequence(jumps, origin, player, board).into_result(),
    }
}

/// Applies a [`Turn`] to `board`.
pub fn apply_turn(turn: &Turn, board: &Board) -> Result<Board, MoveError> {
    apply_move(&turn.mov, turn.origin, turn.player, board)
}

/// Returns true if a man of `player` standing at `location` could make at
/// least one capture.
///
/// A single available jump is enough: any capture either completes a sequence
/// or leads to a further one, and men only move forward, so the search below
/// always ends in a complete sequence.
pub fn can_capture_from(location: Location, player: Player, board: &Board) -> bool {
    let enemy = player.enemy().own_square();
    MoveDirection::ALL.iter().any(|direction| {
        board.square_is(direction.step(location, player), enemy)
            && board.square_is(direction.leap(location, player), Square::Empty)
    })
}

/// Returns the directions the man at `location` can step in, Left before Right.
pub fn possible_simple_moves(location: Location, player: Player, board: &Board) -> Vec<MoveDirection> {
    MoveDirection::ALL
        .into_iter()
        .filter(|&direction| apply_simple_move(direction, location, player, board).is_ok())
        .collect()
}

/// Returns every complete capture sequence available to the man at `location`.
///
/// Depth-first search over direction sequences: incomplete sequences are
/// extended by one jump in each direction, illegal ones are dropped. The order
/// of the returned sequences is not meaningful.
pub fn possible_jump_sequences(
    location: Location,
    player: Player,
    board: &Board,
) -> Vec<Vec<MoveDirection>> {
    let mut complete = Vec::new();
    let mut pending: Vec<Vec<MoveDirection>> = MoveDirection::ALL.iter().map(|&d| vec![d]).collect();

    while let Some(jumps) = pending.pop() {
        match apply_jump_sequence(&jumps, location, player, board) {
            JumpOutcome::Applied(_) => complete.push(jumps),
            JumpOutcome::Illegal => {}
            JumpOutcome::MoreCapturesRequired(_) => {
                for direction in MoveDirection::ALL {
                    let mut longer = jumps.clone();
                    longer.push(direction);
                    pending.push(longer);
                }
            }
        }
    }

    complete
}

/// Returns true if any of `player`'s men can capture.
///
/// When this holds, the forced-capture rule allows only capturing pieces to
/// move.
pub fn board_has_any_capture_for(player: Player, board: &Board) -> bool {
    board
        .pieces(player)
        .any(|location| can_capture_from(location, player, board))
}

/// Returns the moves available to the man at `location`: its capture
/// sequences if it has any, otherwise its simple moves.
///
/// This does not apply the board-wide forced-capture rule. Check
/// [`movability`] first to find out whether the piece may move at all.
pub fn legal_moves_for(location: Location, player: Player, board: &Board) -> Vec<Move> {
    let jumps = possible_jump_sequences(location, player, board);
    if !jumps.is_empty() {
        return jumps.into_iter().map(Move::Jumps).collect();
    }
    possible_simple_moves(location, player, board)
        .into_iter()
        .map(Move::Simple)
        .collect()
}

/// Returns every turn `player` may legally take on `board`.
pub fn legal_turns(player: Player, board: &Board) -> Vec<Turn> {
    locations_with_any_legal_move(player, board)
        .into_iter()
        .flat_map(|origin| {
            legal_moves_for(origin, player, board)
                .into_iter()
                .map(move |m| Turn::new(origin, player, m))
        })
        .collect()
}

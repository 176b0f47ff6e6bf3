//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, where each ply is
//! one complete turn: a movable piece and one of its legal moves.

use super::{apply_turn, legal_turns};
use crate::Board;
use checkers_core::Player;

/// Counts the number of leaf nodes at the given depth with `player` to move.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let turns = legal_turns(player, board);

    if depth == 1 {
        return turns.len() as u64;
    }

    let mut nodes = 0u64;
    for turn in &turns {
        let applied = apply_turn(turn, board);
        debug_assert!(applied.is_ok(), "generated turn {} does not apply", turn);
        if let Ok(next) = applied {
            nodes += perft(&next, player.enemy(), depth - 1);
        }
    }
    nodes
}

/// Perft with divide - shows node count for each turn at depth-1.
/// Useful for debugging to identify which turns have incorrect counts.
pub fn perft_divide(board: &Board, player: Player, depth: u32) -> Vec<(String, u64)> {
    let turns = legal_turns(player, board);
    let mut results = Vec::with_capacity(turns.len());

    for turn in &turns {
        let applied = apply_turn(turn, board);
        debug_assert!(applied.is_ok(), "generated turn {} does not apply", turn);
        let nodes = match applied {
            Ok(next) if depth > 1 => perft(&next, player.enemy(), depth - 1),
            Ok(_) => 1,
            Err(_) => 0,
        };
        results.push((turn.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

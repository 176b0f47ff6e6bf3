//! Turn-by-turn game management.
//!
//! [`Game`] threads a board and the active player through successive turns
//! and detects when the player to move is stuck. It keeps no move history.

use crate::movegen::{self, Immobility, MoveError};
use crate::rules::{GameOutcome, RuleSet, SimplifiedCheckers};
use crate::Board;
use checkers_core::{DiagramError, DiagramParser, Location, Move, Player, Turn};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// The turn was submitted for the player who is not to move.
    #[error("it is not {0}'s turn")]
    WrongPlayer(Player),
    /// The selected piece may not move this turn.
    #[error("{0}")]
    Immovable(Immobility),
    /// The piece can capture, so a simple move is not allowed.
    #[error("that piece can capture, so it must")]
    CaptureRequired,
    /// The move itself could not be applied.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A game in progress: the current board and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Player,
    ply: u32,
    outcome: Option<GameOutcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting layout with Red to move.
    pub fn new() -> Self {
        Self::from_board(
            SimplifiedCheckers.initial_board(),
            SimplifiedCheckers.first_player(),
        )
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, active: Player) -> Self {
        let mut game = Game {
            board,
            active,
            ply: 0,
            outcome: None,
        };
        game.check_game_end();
        game
    }

    /// Creates a game from a diagram string such as [`DiagramParser::STARTPOS`].
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let parsed = DiagramParser::parse(diagram)?;
        Ok(Self::from_board(
            Board::from_rows(parsed.rows),
            parsed.active_player,
        ))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the number of turns played.
    pub fn ply_count(&self) -> u32 {
        self.ply
    }

    /// Returns the outcome if the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the locations of the pieces the active player may move.
    pub fn movable_locations(&self) -> Vec<Location> {
        SimplifiedCheckers.movable_locations(&self.board, self.active)
    }

    /// Returns why the active player may not move the piece at `location`.
    pub fn movability(&self, location: Option<Location>) -> Option<Immobility> {
        SimplifiedCheckers.movability(&self.board, self.active, location)
    }

    /// Returns the moves available to the piece at `location`.
    pub fn legal_moves(&self, location: Location) -> Result<Vec<Move>, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if let Some(reason) = self.movability(Some(location)) {
            return Err(GameError::Immovable(reason));
        }
        Ok(SimplifiedCheckers.legal_moves(&self.board, self.active, location))
    }

    /// Returns every turn the active player may take.
    pub fn legal_turns(&self) -> Vec<Turn> {
        movegen::legal_turns(self.active, &self.board)
    }

    /// Moves the active player's piece at `origin`, then passes the turn.
    pub fn play(&mut self, origin: Location, m: &Move) -> Result<(), GameError> {
        let legal = self.legal_moves(origin)?;
        if !legal.contains(m) {
            return Err(
                match SimplifiedCheckers.apply_move(&self.board, self.active, origin, m) {
                    Err(e) => GameError::Move(e),
                    Ok(_) => GameError::CaptureRequired,
                },
            );
        }

        let next = SimplifiedCheckers.apply_move(&self.board, self.active, origin, m)?;
        tracing::debug!(
            player = %self.active,
            turn = %m.describe(origin, self.active),
            ply = self.ply,
            "applied turn"
        );

        self.board = next;
        self.active = self.active.enemy();
        self.ply += 1;
        self.check_game_end();
        Ok(())
    }

    /// Plays a [`Turn`], which must be for the active player.
    pub fn play_turn(&mut self, turn: &Turn) -> Result<(), GameError> {
        if turn.player != self.active {
            return Err(GameError::WrongPlayer(turn.player));
        }
        self.play(turn.origin, &turn.mov)
    }

    /// Returns the current board and active player as a diagram string.
    pub fn to_diagram(&self) -> String {
        DiagramParser {
            rows: *self.board.rows(),
            active_player: self.active,
        }
        .to_diagram()
    }

    fn check_game_end(&mut self) {
        self.outcome = SimplifiedCheckers.outcome(&self.board, self.active);
        if let Some(outcome) = self.outcome {
            tracing::debug!(%outcome, ply = self.ply, "game over");
        }
    }
}

pub mod attacks;
pub mod board;
pub mod error;
pub mod events;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod oracle;
pub mod perft;
pub mod time_control;
pub mod types;

// Rules engine surface
pub use attacks::{attackers, is_attacked, squares_between};
pub use board::{MoveEffects, Position, castle_rook_squares};
pub use error::{MoveError, PromotionError, SetupError};
pub use events::{EventLog, GameEvent, GameObserver};
pub use game::{Game, MoveOutcome};
pub use legality::{has_legal_move, is_legal_move, legal_moves, legal_moves_for};
pub use movegen::geometric_moves;
pub use oracle::{
    GameStatus, blocking_squares, check_resolving_moves, checkers, is_checked, is_checkmated,
    is_stalemate, status,
};
pub use perft::{divide, perft};
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-choosing opponent
// =============================================================================

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` only when the side has no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's point of view.
    pub score: i32,
    /// Depth the result was searched to.
    pub depth: u8,
    pub nodes: u64,
    /// The stop flag fired before every root move was scored.
    pub stopped: bool,
}

/// A move-choosing opponent.
///
/// Engines read the position and work on their own clones; the caller applies
/// the returned move through [`Game::try_move`].
pub trait Engine: Send {
    /// Picks a move for `side` within `limits`.
    fn search(&mut self, pos: &Position, side: Color, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    /// Reset per-game state.
    fn new_game(&mut self) {}
}

//! Error types for the rules engine.
//!
//! Only expected, recoverable outcomes are errors here. Desynchronized caller
//! state and positions without a king are programmer errors and panic.

use thiserror::Error;

use crate::types::{Color, PieceKind, Square};

/// A move request the rules refuse. The position is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("{kind} on {from} cannot move to {to}")]
    Illegal {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    #[error("pawn on {square} is waiting for promotion")]
    PromotionPending { square: Square },
}

/// Errors from placing or removing pieces outside of play.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("{0} already has a king")]
    DuplicateKing(Color),

    #[error("square {0} is empty")]
    EmptySquare(Square),

    #[error("bad piece placement: {0}")]
    BadPlacement(String),

    #[error("every piece id is in use")]
    ArenaFull,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no pawn is waiting for promotion")]
    NothingPending,

    #[error("a pawn cannot promote to a {0}")]
    InvalidKind(PieceKind),
}

//! The move executor: the single mutation path for a live game.
//!
//! A request is validated against the legality filter, applied to the
//! position, and only then announced to observers. Turn order is not tracked
//! here; callers layer their own policy on top.

use std::fmt;

use tracing::{debug, trace};

use crate::{
    board::{MoveEffects, Position},
    error::{MoveError, PromotionError, SetupError},
    events::{GameEvent, GameObserver},
    legality::{is_legal_move, legal_moves},
    oracle::{self, GameStatus},
    types::*,
};

/// Summary of a move applied by [`Game::try_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub castled: bool,
    /// The pawn now waits for [`Game::complete_promotion`].
    pub promotion_pending: bool,
    /// Status of the side that did not move.
    pub opponent_status: GameStatus,
}

pub struct Game {
    position: Position,
    observers: Vec<Box<dyn GameObserver>>,
    pending_promotion: Option<PieceId>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.position)
            .field("observers", &self.observers.len())
            .field("pending_promotion", &self.pending_promotion)
            .finish()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl Game {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            observers: Vec::new(),
            pending_promotion: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(Position::standard())
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Legal destinations for move hints.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Square> {
        legal_moves(&self.position, id)
    }

    pub fn pending_promotion(&self) -> Option<PieceId> {
        self.pending_promotion
    }

    pub fn status(&self, color: Color) -> GameStatus {
        oracle::status(&self.position, color)
    }

    /// Moves `id` to `to` if the rules allow it.
    ///
    /// An illegal request leaves the game untouched. Asking to move a piece
    /// that is off the board, or that is not the occupant of its own square,
    /// panics.
    pub fn try_move(&mut self, id: PieceId, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Some(pawn) = self.pending_promotion {
            return Err(MoveError::PromotionPending {
                square: self.position.square_of(pawn),
            });
        }

        let piece = *self.position.piece(id);
        let from = self.position.square_of(id);
        assert_eq!(
            self.position.piece_at(from),
            Some(id),
            "piece {id:?} is not the occupant of {from}"
        );

        if !is_legal_move(&self.position, id, to) {
            debug!(kind = %piece.kind, color = %piece.color, %from, %to, "move rejected");
            return Err(MoveError::Illegal {
                kind: piece.kind,
                from,
                to,
            });
        }

        let effects = self.position.make_move(id, to);
        trace!(kind = %piece.kind, color = %piece.color, %from, %to, "move applied");

        let captured = effects
            .captured
            .map(|(victim, _)| self.position.piece(victim).kind);
        self.announce_move(&effects);

        if effects.promotion {
            self.pending_promotion = Some(id);
            self.emit(GameEvent::PromotionPending(id));
        }

        let opponent_status = self.announce_status(piece.color.other());

        Ok(MoveOutcome {
            piece: id,
            from,
            to,
            captured,
            castled: effects.castle.is_some(),
            promotion_pending: effects.promotion,
            opponent_status,
        })
    }

    /// [`Game::try_move`] for whatever stands on `from`. An empty square is a
    /// caller bug and panics.
    pub fn try_move_from(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let Some(id) = self.position.piece_at(from) else {
            panic!("no piece on {from} to move");
        };
        self.try_move(id, to)
    }

    /// Turns the waiting pawn into `kind`, then re-checks the opponent against
    /// the new arrangement. Observers see the pawn removed and the new piece
    /// placed under the same id.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<PieceId, PromotionError> {
        let pawn = self
            .pending_promotion
            .ok_or(PromotionError::NothingPending)?;
        if !kind.is_promotion_target() {
            return Err(PromotionError::InvalidKind(kind));
        }

        let square = self.position.square_of(pawn);
        let color = self.position.piece(pawn).color;
        let promoted = self.position.promote(pawn, kind);
        self.pending_promotion = None;
        debug!(%square, %color, %kind, "promotion completed");

        self.emit(GameEvent::PieceRemoved { square, piece: pawn });
        self.emit(GameEvent::PiecePlaced {
            square,
            piece: promoted,
        });
        self.announce_status(color.other());
        Ok(promoted)
    }

    /// Puts a new piece on an empty square outside of normal play.
    pub fn place_piece(
        &mut self,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, SetupError> {
        let id = self.position.place(square, kind, color)?;
        self.emit(GameEvent::PiecePlaced { square, piece: id });
        Ok(id)
    }

    /// Takes a piece off the board outside of normal play.
    pub fn remove_piece(&mut self, square: Square) -> Result<PieceId, SetupError> {
        let id = self.position.remove(square)?;
        if self.pending_promotion == Some(id) {
            self.pending_promotion = None;
        }
        self.emit(GameEvent::PieceRemoved { square, piece: id });
        Ok(id)
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    fn announce_move(&mut self, effects: &MoveEffects) {
        self.emit(GameEvent::PieceRemoved {
            square: effects.from,
            piece: effects.piece,
        });
        if let Some((victim, square)) = effects.captured {
            self.emit(GameEvent::PieceRemoved {
                square,
                piece: victim,
            });
        }
        self.emit(GameEvent::PiecePlaced {
            square: effects.to,
            piece: effects.piece,
        });
        if let Some((rook, rook_from, rook_to)) = effects.castle {
            self.emit(GameEvent::PieceRemoved {
                square: rook_from,
                piece: rook,
            });
            self.emit(GameEvent::PiecePlaced {
                square: rook_to,
                piece: rook,
            });
        }
    }

    fn announce_status(&mut self, color: Color) -> GameStatus {
        let status = oracle::status(&self.position, color);
        let event = match status {
            GameStatus::Checkmate => Some(GameEvent::Checkmate(color)),
            GameStatus::Stalemate => Some(GameEvent::Stalemate(color)),
            GameStatus::Check => Some(GameEvent::Check(color)),
            GameStatus::Ongoing => None,
        };
        if let Some(event) = event {
            debug!(%color, ?status, "status changed");
            self.emit(event);
        }
        status
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

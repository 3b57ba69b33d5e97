//! Notifications raised by [`Game`](crate::Game) after it changes the board.

use std::sync::{Arc, Mutex, PoisonError};

use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PiecePlaced { square: Square, piece: PieceId },
    PieceRemoved { square: Square, piece: PieceId },
    /// The king of this color is attacked.
    Check(Color),
    /// The king of this color is mated.
    Checkmate(Color),
    /// This color is not in check and has no legal move.
    Stalemate(Color),
    /// The pawn waits on the last rank until a promotion is completed.
    PromotionPending(PieceId),
}

/// Fire-and-forget receiver of game events, called synchronously.
pub trait GameObserver: Send {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Observer that records every event; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<GameEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }

    pub fn snapshot(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*event);
    }
}

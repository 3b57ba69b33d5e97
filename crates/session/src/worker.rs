//! Runs engine searches off the caller's task.
//!
//! The search works on a private clone of the position, so the live game
//! needs no locking; the session simply refuses other moves while it is the
//! bot's turn.

use castellan_core::{Color, Engine, MoveOutcome, Position, SearchLimits, SearchResult};
use tracing::debug;

use crate::error::{SessionError, WorkerError};
use crate::session::Session;

pub struct BotWorker {
    /// Moved into the blocking task for the duration of a search.
    engine: Option<Box<dyn Engine>>,
}

impl BotWorker {
    pub fn new(engine: impl Engine + 'static) -> Self {
        Self::from_boxed(Box::new(engine))
    }

    pub fn from_boxed(engine: Box<dyn Engine>) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    /// `None` after a search task panicked and took the engine with it.
    pub fn engine_name(&self) -> Option<&str> {
        self.engine.as_deref().map(|e| e.name())
    }

    /// Searches `position` on the blocking thread pool.
    pub async fn search(
        &mut self,
        position: Position,
        side: Color,
        limits: SearchLimits,
    ) -> Result<SearchResult, WorkerError> {
        let mut engine = self.engine.take().ok_or(WorkerError::EngineLost)?;
        let (engine, result) = tokio::task::spawn_blocking(move || {
            let result = engine.search(&position, side, limits);
            (engine, result)
        })
        .await
        .map_err(|e| WorkerError::Join(e.to_string()))?;
        self.engine = Some(engine);
        Ok(result)
    }
}

/// Runs the bot's search for the current position and applies its move.
pub async fn drive_bot_turn(
    session: &mut Session,
    worker: &mut BotWorker,
    limits: SearchLimits,
) -> Result<MoveOutcome, SessionError> {
    if session.outcome().is_over() {
        return Err(SessionError::GameOver);
    }
    if !session.is_bot_turn() {
        return Err(SessionError::NotYourTurn);
    }

    let side = session.side_to_move();
    let result = worker
        .search(session.position().clone(), side, limits)
        .await?;
    debug!(
        %side,
        score = result.score,
        nodes = result.nodes,
        stopped = result.stopped,
        "bot search finished"
    );
    let mv = result.best_move.ok_or(SessionError::GameOver)?;
    session.apply_bot_move(mv)
}

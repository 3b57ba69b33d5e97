//! Random Move Opponent
//!
//! Picks uniformly among all legal moves. Serves as a sparring partner for
//! self-play and as a stress driver for the rules engine.

use castellan_core::{legal_moves_for, Color, Engine, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

/// An opponent with no evaluation at all.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomBot {
    /// `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Engine for RandomBot {
    fn search(&mut self, pos: &Position, side: Color, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves_for(pos, side);
        let best_move = moves.choose(&mut self.rng).copied();
        trace!(%side, choices = moves.len(), "random move");

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: moves.len() as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

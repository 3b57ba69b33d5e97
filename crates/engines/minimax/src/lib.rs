//! Minimax Chess Opponent
//!
//! Fixed-depth minimax with alpha-beta pruning over cloned positions and a
//! pure material evaluation. Equal-scoring moves are broken by a seedable
//! random draw, so the same seed replays the same game.

mod eval;
mod search;

use std::time::Duration;

use castellan_core::{Color, Engine, Move, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use eval::{evaluate, piece_value, PIECE_VALUES};
pub use search::{minimax, play, search_root, terminal_score, RootOutcome, MATE};

pub const DEFAULT_DEPTH: u8 = 3;

/// Bot settings, usually read from the `[bot]` table of a session config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Plies searched from the root.
    pub depth: u8,
    /// Seed for the tie-break; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Optional per-move deadline in milliseconds.
    pub move_time_ms: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            move_time_ms: None,
        }
    }
}

impl BotConfig {
    pub fn limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Material-only minimax opponent.
#[derive(Debug, Clone)]
pub struct MinimaxBot {
    config: BotConfig,
    rng: StdRng,
    nodes: u64,
}

impl Default for MinimaxBot {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

impl MinimaxBot {
    pub fn new(config: BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(BotConfig {
            depth,
            ..BotConfig::default()
        })
    }

    pub fn seeded(depth: u8, seed: u64) -> Self {
        Self::new(BotConfig {
            depth,
            seed: Some(seed),
            move_time_ms: None,
        })
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Picks a move for `side` with the configured limits. `None` only when
    /// `side` has no legal move, which callers rule out beforehand.
    pub fn choose_move(&mut self, pos: &Position, side: Color) -> Option<Move> {
        let limits = self.config.limits();
        self.search(pos, side, limits).best_move
    }
}

impl Engine for MinimaxBot {
    fn search(&mut self, pos: &Position, side: Color, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();
        let depth = limits.depth.max(1);

        let outcome = search_root(pos, side, depth, &mut self.nodes, &limits.control);
        for (mv, score) in &outcome.scored {
            trace!(from = %pos.square_of(mv.piece), to = %mv.to, score, "root candidate");
        }

        let tied = outcome.best_moves();
        let best_move = tied.choose(&mut self.rng).copied().or(outcome.fallback);
        let score = outcome.best_score().unwrap_or(0);

        if let Some(mv) = best_move {
            debug!(
                %side,
                from = %pos.square_of(mv.piece),
                to = %mv.to,
                score,
                ties = tied.len(),
                nodes = self.nodes,
                stopped = outcome.stopped,
                "bot chose move"
            );
        }

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

//! Minimax search with alpha-beta pruning over cloned positions.
//!
//! Scores are always from the bot's point of view: the bot maximizes, the
//! opponent minimizes. Every root candidate gets a full window, so root
//! scores are exact and ties can be collected.

use castellan_core::{
    check_resolving_moves, is_checked, legal_moves_for, Color, Move, PieceKind, Position,
    TimeControl,
};

use crate::eval::evaluate;

/// Base score for a mate. Remaining depth is added so faster mates win.
pub const MATE: i32 = 10_000;

const INF: i32 = i32::MAX / 2;

/// Root candidates with their scores.
#[derive(Debug, Clone, Default)]
pub struct RootOutcome {
    /// Fully searched candidates in generation order.
    pub scored: Vec<(Move, i32)>,
    /// First candidate, returned when nothing could be scored in time.
    pub fallback: Option<Move>,
    pub stopped: bool,
}

impl RootOutcome {
    pub fn best_score(&self) -> Option<i32> {
        self.scored.iter().map(|&(_, s)| s).max()
    }

    /// Every candidate sharing the best score.
    pub fn best_moves(&self) -> Vec<Move> {
        match self.best_score() {
            Some(best) => self
                .scored
                .iter()
                .filter(|&&(_, s)| s == best)
                .map(|&(mv, _)| mv)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Clones `pos` and plays `mv` on the copy. Promotions become queens.
pub fn play(pos: &Position, mv: Move) -> Position {
    let mut next = pos.clone();
    if next.make_move(mv.piece, mv.to).promotion {
        next.promote(mv.piece, PieceKind::Queen);
    }
    next
}

/// Scores every root candidate of `bot` at `depth` plies.
///
/// In check the candidates are the check-resolving moves; otherwise every
/// legal move.
pub fn search_root(
    pos: &Position,
    bot: Color,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> RootOutcome {
    let candidates = check_resolving_moves(pos, bot);
    let mut outcome = RootOutcome {
        scored: Vec::with_capacity(candidates.len()),
        fallback: candidates.first().copied(),
        stopped: false,
    };

    for mv in candidates {
        if tc.is_stopped() || (tc.should_check_time(*nodes) && tc.check_time()) {
            outcome.stopped = true;
            break;
        }

        let child = play(pos, mv);
        *nodes += 1;
        let (score, stopped) = minimax(
            &child,
            bot,
            depth.saturating_sub(1),
            false,
            -INF,
            INF,
            nodes,
            tc,
        );
        if stopped {
            outcome.stopped = true;
            break;
        }
        outcome.scored.push((mv, score));
    }
    outcome
}

/// Returns (score, stopped). A stopped result carries no usable score.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    pos: &Position,
    bot: Color,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if tc.is_stopped() || (tc.should_check_time(*nodes) && tc.check_time()) {
        return (0, true);
    }
    if depth == 0 {
        return (evaluate(pos, bot), false);
    }

    let side = if maximizing { bot } else { bot.other() };
    let moves = legal_moves_for(pos, side);
    if moves.is_empty() {
        return (terminal_score(pos, side, depth, maximizing), false);
    }

    let mut best = if maximizing { -INF } else { INF };
    for mv in moves {
        let child = play(pos, mv);
        *nodes += 1;
        let (score, stopped) = minimax(&child, bot, depth - 1, !maximizing, alpha, beta, nodes, tc);
        if stopped {
            return (best, true);
        }

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    (best, false)
}

/// Score of a node where `side` has no legal move.
pub fn terminal_score(pos: &Position, side: Color, depth: u8, maximizing: bool) -> i32 {
    if !is_checked(pos, side) {
        return 0;
    }
    let mate = MATE + i32::from(depth);
    if maximizing {
        -mate
    } else {
        mate
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

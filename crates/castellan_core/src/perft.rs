use crate::{board::Position, legality::legal_moves_for, types::*};

/// Pure perft node count for `side` to move.
///
/// Counts the leaves of the legal move tree down to `depth`. A pawn reaching
/// the last rank branches once per promotion kind.
pub fn perft(pos: &Position, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    legal_moves_for(pos, side)
        .into_iter()
        .map(|mv| subtree(pos, side, mv, depth))
        .sum()
}

/// Per-move breakdown of [`perft`], for tracking down count mismatches.
pub fn divide(pos: &Position, side: Color, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves_for(pos, side)
        .into_iter()
        .map(|mv| (mv, subtree(pos, side, mv, depth)))
        .collect()
}

fn subtree(pos: &Position, side: Color, mv: Move, depth: u8) -> u64 {
    let mut next = pos.clone();
    if !next.make_move(mv.piece, mv.to).promotion {
        return perft(&next, side.other(), depth - 1);
    }
    PieceKind::PROMOTIONS
        .iter()
        .map(|&kind| {
            let mut promoted = next.clone();
            promoted.promote(mv.piece, kind);
            perft(&promoted, side.other(), depth - 1)
        })
        .sum()
}

//! Legality filter: geometric candidates minus self-check.
//!
//! Each candidate is played on a clone of the position and the mover's king
//! is tested for attacks on that clone. Castling additionally needs the
//! squares the king passes over to be safe.

use crate::{
    attacks::is_attacked,
    board::Position,
    movegen::geometric_moves_into,
    types::*,
};

/// Legal destinations of the piece `id`.
pub fn legal_moves(pos: &Position, id: PieceId) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    geometric_moves_into(pos, id, &mut out);
    out.retain(|&to| lands_on_target(pos, id, to) && !leaves_king_attacked(pos, id, to));
    out
}

pub fn is_legal_move(pos: &Position, id: PieceId, to: Square) -> bool {
    let mut candidates = Vec::with_capacity(28);
    geometric_moves_into(pos, id, &mut candidates);
    candidates.contains(&to) && lands_on_target(pos, id, to) && !leaves_king_attacked(pos, id, to)
}

/// A destination may be empty or hold an enemy piece other than the king.
fn lands_on_target(pos: &Position, id: PieceId, to: Square) -> bool {
    match pos.occupant(to) {
        None => true,
        Some(target) => target.color != pos.piece(id).color && target.kind != PieceKind::King,
    }
}

/// Plays `id` to `to` on a throwaway clone and reports whether the mover's
/// king ends up attacked, or passed over an attacked square while castling.
pub fn leaves_king_attacked(pos: &Position, id: PieceId, to: Square) -> bool {
    let color = pos.piece(id).color;
    let enemy = color.other();

    let mut sim = pos.clone();
    let effects = sim.make_move(id, to);
    if is_attacked(&sim, sim.king_square(color), enemy) {
        return true;
    }

    // Every square the castling king starts on or crosses must be safe too.
    if effects.castle.is_some() {
        let step: i8 = if to.file() > effects.from.file() { 1 } else { -1 };
        let mut cur = Some(effects.from);
        while let Some(sq) = cur {
            if sq == to {
                break;
            }
            if is_attacked(pos, sq, enemy) {
                return true;
            }
            cur = sq.offset(step, 0);
        }
    }
    false
}

/// Every legal move of `color`, pieces in square order.
pub fn legal_moves_for(pos: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for id in pos.pieces_of(color) {
        out.extend(legal_moves(pos, id).into_iter().map(|to| Move::new(id, to)));
    }
    out
}

/// True as soon as any piece of `color` has a legal move.
pub fn has_legal_move(pos: &Position, color: Color) -> bool {
    let mut candidates = Vec::with_capacity(28);
    pos.pieces_of(color).any(|id| {
        geometric_moves_into(pos, id, &mut candidates);
        candidates
            .iter()
            .any(|&to| lands_on_target(pos, id, to) && !leaves_king_attacked(pos, id, to))
    })
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;

//! Geometric move generation, one rule per piece kind.
//!
//! Candidates ignore the safety of the mover's own king. Knights, sliders and
//! the king also list squares held by their own side; the legality filter
//! drops those.

use crate::{attacks::is_attacked, board::Position, types::*};

/// Geometric destinations of the piece `id`, freshly allocated.
pub fn geometric_moves(pos: &Position, id: PieceId) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    geometric_moves_into(pos, id, &mut out);
    out
}

/// Geometric destinations of the piece `id`, reusing `out`.
pub fn geometric_moves_into(pos: &Position, id: PieceId, out: &mut Vec<Square>) {
    out.clear();
    let piece = pos.piece(id);
    let from = pos.square_of(id);
    match piece.kind {
        PieceKind::Pawn => gen_pawn(pos, from, piece.color, out),
        PieceKind::Knight => gen_leaper(from, &KNIGHT_JUMPS, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_slider(pos, from, piece.kind.rays(), out)
        }
        PieceKind::King => {
            gen_leaper(from, &ALL_DIRECTIONS, out);
            gen_castle(pos, id, from, piece.color, out);
        }
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start rank
    if let Some(to) = from.offset(0, dir)
        && pos.is_empty(to)
    {
        out.push(to);
        if from.rank() == c.pawn_rank()
            && let Some(to2) = from.offset(0, 2 * dir)
            && pos.is_empty(to2)
        {
            out.push(to2);
        }
    }

    // captures onto enemy pieces only
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir)
            && let Some(target) = pos.occupant(to)
            && target.color != c
        {
            out.push(to);
        }
    }

    // en passant against the pawn that just double-stepped beside us
    if let Some(ep) = pos.last_double_step() {
        let victim = pos.piece(ep);
        if let Some(ep_sq) = victim.square()
            && victim.kind == PieceKind::Pawn
            && victim.color != c
            && ep_sq.rank() == from.rank()
            && ep_sq.file().abs_diff(from.file()) == 1
            && let Some(to) = ep_sq.offset(0, dir)
        {
            out.push(to);
        }
    }
}

fn gen_leaper(from: Square, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(deltas.iter().filter_map(|&(df, dr)| from.offset(df, dr)));
}

fn gen_slider(pos: &Position, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            out.push(to);
            if !pos.is_empty(to) {
                break;
            }
            cur = to.offset(df, dr);
        }
    }
}

/// Offers the two-file castling hop on each wing whose rook is still at home
/// and unmoved, with nothing in between and the king not in check. Attacks on
/// the king's path are left to the legality filter.
fn gen_castle(pos: &Position, king: PieceId, from: Square, c: Color, out: &mut Vec<Square>) {
    let home = Square::new(4, c.back_rank());
    if pos.piece(king).has_moved() || Some(from) != home {
        return;
    }

    let mut in_check = None;
    for (rook_file, king_file) in [(7u8, 6u8), (0, 2)] {
        let Some(rook_sq) = Square::new(rook_file, c.back_rank()) else {
            continue;
        };
        let rook_ready = pos.occupant(rook_sq).is_some_and(|r| {
            r.kind == PieceKind::Rook && r.color == c && !r.has_moved()
        });
        if !rook_ready {
            continue;
        }
        let (lo, hi) = (from.file().min(rook_file), from.file().max(rook_file));
        let path_clear = (lo + 1..hi)
            .filter_map(|f| Square::new(f, c.back_rank()))
            .all(|sq| pos.is_empty(sq));
        if !path_clear {
            continue;
        }
        if *in_check.get_or_insert_with(|| is_attacked(pos, from, c.other())) {
            return;
        }
        if let Some(to) = Square::new(king_file, c.back_rank()) {
            out.push(to);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

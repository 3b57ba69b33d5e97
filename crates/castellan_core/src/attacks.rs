//! Attack detection.
//!
//! Attacks are found by looking outward from the target square for pieces
//! that could reach it. Pawns attack only their two forward diagonals. A
//! sliding ray is stopped by the first piece it meets, except the defending
//! king: the ray passes through its square, so a king cannot escape by
//! stepping back along the line it is attacked on.

use crate::board::Position;
use crate::types::*;

/// Calls `visit` for every piece of `by` attacking `target` until it returns
/// `true`. Returns whether the scan was stopped early.
fn scan_attackers(
    pos: &Position,
    target: Square,
    by: Color,
    mut visit: impl FnMut(PieceId) -> bool,
) -> bool {
    let mut hits = |sq: Option<Square>, kinds: &[PieceKind]| -> bool {
        if let Some(sq) = sq
            && let Some(id) = pos.piece_at(sq)
        {
            let pc = pos.piece(id);
            if pc.color == by && kinds.contains(&pc.kind) {
                return visit(id);
            }
        }
        false
    };

    // A pawn of `by` attacks from one rank behind the target, seen from its side.
    let back = -by.forward();
    for df in [-1, 1] {
        if hits(target.offset(df, back), &[PieceKind::Pawn]) {
            return true;
        }
    }
    for (df, dr) in KNIGHT_JUMPS {
        if hits(target.offset(df, dr), &[PieceKind::Knight]) {
            return true;
        }
    }
    for (df, dr) in ALL_DIRECTIONS {
        if hits(target.offset(df, dr), &[PieceKind::King]) {
            return true;
        }
    }

    let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
        (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, kinds) in rays {
        for &(df, dr) in dirs {
            let mut cur = target.offset(df, dr);
            while let Some(sq) = cur {
                if let Some(id) = pos.piece_at(sq) {
                    let pc = pos.piece(id);
                    if pc.color == by && kinds.contains(&pc.kind) {
                        if visit(id) {
                            return true;
                        }
                        break;
                    }
                    if !(pc.kind == PieceKind::King && pc.color != by) {
                        break;
                    }
                }
                cur = sq.offset(df, dr);
            }
        }
    }

    false
}

/// True if any piece of `by` attacks `target`.
pub fn is_attacked(pos: &Position, target: Square, by: Color) -> bool {
    scan_attackers(pos, target, by, |_| true)
}

/// Every piece of `by` attacking `target`.
pub fn attackers(pos: &Position, target: Square, by: Color) -> Vec<PieceId> {
    let mut out = Vec::new();
    scan_attackers(pos, target, by, |id| {
        out.push(id);
        false
    });
    out
}

/// Squares strictly between two squares on a shared line, nearest `from` first.
/// Empty when the squares are not on a common rank, file or diagonal.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let df = to.file() as i8 - from.file() as i8;
    let dr = to.rank() as i8 - from.rank() as i8;
    if !(df == 0 || dr == 0 || df.abs() == dr.abs()) {
        return Vec::new();
    }
    let step = (df.signum(), dr.signum());
    let mut out = Vec::new();
    let mut cur = from.offset(step.0, step.1);
    while let Some(sq) = cur {
        if sq == to {
            break;
        }
        out.push(sq);
        cur = sq.offset(step.0, step.1);
    }
    out
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

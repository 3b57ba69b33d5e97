//! Check, checkmate and stalemate detection.

use crate::{
    attacks::{attackers, is_attacked, squares_between},
    board::Position,
    legality::{has_legal_move, legal_moves, legal_moves_for},
    types::*,
};

/// State of one side after the other side's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

pub fn is_checked(pos: &Position, color: Color) -> bool {
    is_attacked(pos, pos.king_square(color), color.other())
}

/// Enemy pieces currently attacking the king of `color`.
pub fn checkers(pos: &Position, color: Color) -> Vec<PieceId> {
    attackers(pos, pos.king_square(color), color.other())
}

/// Squares where a piece ends the check from `checker`: its own square, plus
/// the squares between it and the king when it is a sliding piece.
pub fn blocking_squares(pos: &Position, checker: PieceId, king_sq: Square) -> Vec<Square> {
    let at = pos.square_of(checker);
    let mut out = vec![at];
    if pos.piece(checker).kind.is_slider() {
        out.extend(squares_between(at, king_sq));
    }
    out
}

/// Legal non-king moves that capture or block a single checker.
///
/// An en passant capture of a checking pawn lands beside it rather than on
/// it, so it counts as a capture as well.
fn interpositions(pos: &Position, color: Color, checker: PieceId) -> Vec<Move> {
    let king = pos.king(color);
    let king_sq = pos.square_of(king);
    let targets = blocking_squares(pos, checker, king_sq);
    let checker_sq = pos.square_of(checker);
    let en_passant_victim = pos.last_double_step() == Some(checker);

    let mut out = Vec::new();
    for id in pos.pieces_of(color).filter(|&id| id != king) {
        let piece = pos.piece(id);
        let from = pos.square_of(id);
        for to in legal_moves(pos, id) {
            let takes_en_passant = en_passant_victim
                && piece.kind == PieceKind::Pawn
                && to.file() == checker_sq.file()
                && from.rank() == checker_sq.rank();
            if targets.contains(&to) || takes_en_passant {
                out.push(Move::new(id, to));
            }
        }
    }
    out
}

/// The moves that get `color` out of check: king escapes, plus captures and
/// blocks of a sole checker. When `color` is not in check every legal move
/// qualifies.
pub fn check_resolving_moves(pos: &Position, color: Color) -> Vec<Move> {
    let found = checkers(pos, color);
    if found.is_empty() {
        return legal_moves_for(pos, color);
    }
    let king = pos.king(color);
    let mut out: Vec<Move> = legal_moves(pos, king)
        .into_iter()
        .map(|to| Move::new(king, to))
        .collect();
    if let &[checker] = found.as_slice() {
        out.extend(interpositions(pos, color, checker));
    }
    out
}

/// In check, no king move, and either a double check or nothing able to
/// capture or block the single checker.
pub fn is_checkmated(pos: &Position, color: Color) -> bool {
    let found = checkers(pos, color);
    if found.is_empty() {
        return false;
    }
    if !legal_moves(pos, pos.king(color)).is_empty() {
        return false;
    }
    match *found.as_slice() {
        [checker] => interpositions(pos, color, checker).is_empty(),
        _ => true,
    }
}

pub fn is_stalemate(pos: &Position, color: Color) -> bool {
    !is_checked(pos, color) && !has_legal_move(pos, color)
}

/// Status of `color`: mate first, then no moves at all, then plain check.
pub fn status(pos: &Position, color: Color) -> GameStatus {
    if is_checkmated(pos, color) {
        GameStatus::Checkmate
    } else if !has_legal_move(pos, color) {
        GameStatus::Stalemate
    } else if is_checked(pos, color) {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod oracle_tests;

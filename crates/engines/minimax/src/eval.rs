//! Material evaluation from the bot's side of the board.

use castellan_core::{Color, PieceKind, Position};

/// Material values in pawns, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 100];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Material balance for `bot`: its pieces count positive, the opponent's
/// negative, regardless of whose turn it is.
pub fn evaluate(pos: &Position, bot: Color) -> i32 {
    Color::BOTH
        .iter()
        .map(|&color| {
            let material: i32 = pos
                .pieces_of(color)
                .map(|id| piece_value(pos.piece(id).kind))
                .sum();
            if color == bot {
                material
            } else {
                -material
            }
        })
        .sum()
}

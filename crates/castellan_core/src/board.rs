use std::fmt;

use crate::error::SetupError;
use crate::types::*;

/// What a call to [`Position::make_move`] changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEffects {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    /// Captured piece and the square it stood on (not `to` when en passant).
    pub captured: Option<(PieceId, Square)>,
    /// Rook relocated by castling: (rook, from, to).
    pub castle: Option<(PieceId, Square, Square)>,
    /// A pawn reached its last rank and still needs a replacement kind.
    pub promotion: bool,
}

/// Board plus piece arena.
///
/// The grid owns occupancy; every piece keeps a non-owning back-reference to
/// its square. Captured and promoted pieces stay in the arena unplaced, so ids
/// remain stable across clones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [Option<PieceId>; 64],
    pieces: Vec<Piece>,
    last_double_step: Option<PieceId>,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            pieces: Vec::with_capacity(32),
            last_double_step: None,
        }
    }

    /// The opening setup, White on ranks 6 and 7.
    pub fn standard() -> Self {
        let mut p = Position::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut next: u16 = 0;
        for color in Color::BOTH {
            for (f, &kind) in back.iter().enumerate() {
                let square = Square(color.back_rank() * 8 + f as u8);
                p.push(PieceId(next), square, kind, color);
                next += 1;
            }
            for f in 0..8 {
                let square = Square(color.pawn_rank() * 8 + f);
                p.push(PieceId(next), square, PieceKind::Pawn, color);
                next += 1;
            }
        }
        p
    }

    /// Builds a position from the piece-placement field of a FEN string.
    ///
    /// Rows run from rank 0 (Black's back rank) down to rank 7. Anything after
    /// the first whitespace is ignored. Every piece starts unmoved, so kings
    /// and rooks on their home squares may castle.
    pub fn from_placement(placement: &str) -> Result<Self, SetupError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(SetupError::BadPlacement(format!(
                "expected 8 ranks, found {}",
                rows.len()
            )));
        }

        let mut pos = Position::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file: u8 = 0;
            for ch in row.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as u8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                        SetupError::BadPlacement(format!("unknown piece letter '{ch}'"))
                    })?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = Square::new(file, rank as u8).ok_or_else(|| {
                        SetupError::BadPlacement(format!("rank {rank} has too many files"))
                    })?;
                    pos.place(square, kind, color)?;
                    file += 1;
                }
                if file > 8 {
                    return Err(SetupError::BadPlacement(format!(
                        "rank {rank} has too many files"
                    )));
                }
            }
            if file != 8 {
                return Err(SetupError::BadPlacement(format!(
                    "rank {rank} covers {file} files"
                )));
            }
        }
        Ok(pos)
    }

    /// Puts a fresh, unmoved piece on an empty square.
    ///
    /// Fails with [`SetupError::ArenaFull`] once every id has been handed
    /// out; removed pieces keep their ids.
    pub fn place(
        &mut self,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, SetupError> {
        if self.board[square.index()].is_some() {
            return Err(SetupError::Occupied(square));
        }
        if kind == PieceKind::King && self.find_king(color).is_some() {
            return Err(SetupError::DuplicateKing(color));
        }
        self.put(square, kind, color)
    }

    /// Takes the piece off `square`. Its id stays in the arena, unplaced.
    pub fn remove(&mut self, square: Square) -> Result<PieceId, SetupError> {
        let id = self.board[square.index()].ok_or(SetupError::EmptySquare(square))?;
        self.lift(id);
        if self.last_double_step == Some(id) {
            self.last_double_step = None;
        }
        Ok(id)
    }

    fn put(
        &mut self,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, SetupError> {
        let id = u16::try_from(self.pieces.len())
            .map(PieceId)
            .map_err(|_| SetupError::ArenaFull)?;
        self.push(id, square, kind, color);
        Ok(id)
    }

    fn push(&mut self, id: PieceId, square: Square, kind: PieceKind, color: Color) {
        debug_assert_eq!(id.index(), self.pieces.len());
        let mut piece = Piece::new(kind, color);
        piece.set_square(Some(square));
        self.pieces.push(piece);
        self.board[square.index()] = Some(id);
    }

    fn lift(&mut self, id: PieceId) {
        if let Some(sq) = self.pieces[id.index()].square() {
            self.board[sq.index()] = None;
        }
        self.pieces[id.index()].set_square(None);
    }

    fn relocate(&mut self, id: PieceId, to: Square) {
        self.lift(id);
        self.board[to.index()] = Some(id);
        let piece = &mut self.pieces[id.index()];
        piece.set_square(Some(to));
        piece.set_moved(true);
    }

    /// The arena entry for `id`, placed or not.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Id of the piece standing on `square`.
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.board[square.index()]
    }

    /// The piece standing on `square`.
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square).map(|id| self.piece(id))
    }

    /// True if nothing stands on `square`.
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square.index()].is_none()
    }

    /// Square of a piece that must be on the board.
    pub fn square_of(&self, id: PieceId) -> Square {
        match self.piece(id).square() {
            Some(sq) => sq,
            None => panic!("piece {id:?} is not on the board"),
        }
    }

    /// Pieces of `color` currently on the board, in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.board
            .iter()
            .flatten()
            .copied()
            .filter(move |&id| self.piece(id).color == color)
    }

    /// The king of `color`, if one is on the board.
    pub fn find_king(&self, color: Color) -> Option<PieceId> {
        self.pieces_of(color)
            .find(|&id| self.piece(id).kind == PieceKind::King)
    }

    /// The king of `color`. A position without one is a setup bug.
    pub fn king(&self, color: Color) -> PieceId {
        match self.find_king(color) {
            Some(id) => id,
            None => panic!("position has no {color} king"),
        }
    }

    /// Square of the king of `color`. Panics without one.
    pub fn king_square(&self, color: Color) -> Square {
        self.square_of(self.king(color))
    }

    /// The pawn that advanced two ranks on the immediately preceding move.
    pub fn last_double_step(&self) -> Option<PieceId> {
        self.last_double_step
    }

    /// Overrides a piece's has-moved flag, for building castling scenarios.
    pub fn set_has_moved(&mut self, id: PieceId, moved: bool) {
        self.pieces[id.index()].set_moved(moved);
    }

    /// Applies a move without checking it against the rules.
    ///
    /// Handles captures, en passant removal, the castling rook and the
    /// double-step marker. A pawn reaching the last rank stays a pawn and
    /// `promotion` is set in the returned effects.
    pub fn make_move(&mut self, id: PieceId, to: Square) -> MoveEffects {
        let piece = *self.piece(id);
        let from = self.square_of(id);
        assert_eq!(
            self.board[from.index()],
            Some(id),
            "piece {id:?} is not the occupant of {from}"
        );

        // A pawn moving diagonally onto an empty square captures en passant.
        let capture_square = if piece.kind == PieceKind::Pawn
            && from.file() != to.file()
            && self.is_empty(to)
        {
            Square(from.rank() * 8 + to.file())
        } else {
            to
        };

        let victim = self.board[capture_square.index()];
        let captured = victim.map(|victim| {
            assert_ne!(
                self.piece(victim).color,
                piece.color,
                "{} on {from} cannot capture its own side on {capture_square}",
                piece.kind
            );
            self.lift(victim);
            (victim, capture_square)
        });

        let castle = if piece.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            let (rook_from, rook_to) = castle_rook_squares(from, to);
            let rook = match self.board[rook_from.index()] {
                Some(rook) => rook,
                None => panic!("no rook on {rook_from} to castle with"),
            };
            self.relocate(rook, rook_to);
            Some((rook, rook_from, rook_to))
        } else {
            None
        };

        self.relocate(id, to);

        self.last_double_step =
            (piece.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2).then_some(id);

        MoveEffects {
            piece: id,
            from,
            to,
            captured,
            castle,
            promotion: piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank(),
        }
    }

    /// Turns a pawn into `kind` where it stands. The piece keeps its id, so
    /// promotion never grows the arena.
    pub fn promote(&mut self, pawn: PieceId, kind: PieceKind) -> PieceId {
        let piece = &mut self.pieces[pawn.index()];
        assert_eq!(
            piece.kind,
            PieceKind::Pawn,
            "only a pawn can promote, found {}",
            piece.kind
        );
        piece.kind = kind;
        piece.set_moved(true);
        pawn
    }
}

/// Rook squares for a castling hop of the king from `king_from` to `king_to`.
pub fn castle_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    let rank = king_from.rank() * 8;
    let rook_file = if king_to.file() > king_from.file() { 7 } else { 0 };
    let landing = (king_from.file() + king_to.file()) / 2;
    (Square(rank + rook_file), Square(rank + landing))
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8u8 {
            for file in 0..8u8 {
                let c = self
                    .occupant(Square(rank * 8 + file))
                    .map(|p| p.symbol())
                    .unwrap_or('.');
                write!(f, "{c}")?;
            }
            writeln!(f, " {}", 8 - rank)?;
        }
        write!(f, "abcdefgh")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

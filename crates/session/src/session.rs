//! Turn policy layered over the move executor.
//!
//! The session owns whose turn it is, the current selection and the game
//! result. Turns pass only after a completed move, and a pending promotion
//! holds the turn until it is resolved.

use castellan_core::{
    Color, Game, GameObserver, GameStatus, Move, MoveError, MoveOutcome, PieceId, PieceKind,
    Position, Square,
};
use tracing::{debug, info};

use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    TwoPlayers,
    /// The bot plays the color opposite `human`.
    VersusBot { human: Color },
    /// Free placement until the first move, then two-player alternation.
    Sandbox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

#[derive(Debug)]
pub struct Session {
    game: Game,
    mode: Mode,
    side_to_move: Color,
    selected: Option<PieceId>,
    started: bool,
    outcome: Outcome,
    plies: u32,
}

impl Session {
    /// Standard setup, or two lone kings for the sandbox.
    pub fn new(mode: Mode) -> Self {
        let position = match mode {
            Mode::Sandbox => sandbox_start(),
            Mode::TwoPlayers | Mode::VersusBot { .. } => Position::standard(),
        };
        Self::with_position(mode, position)
    }

    /// Starts from an arbitrary position with White to move.
    pub fn with_position(mode: Mode, position: Position) -> Self {
        info!(?mode, "session started");
        Self {
            game: Game::new(position),
            mode,
            side_to_move: Color::White,
            selected: None,
            started: false,
            outcome: Outcome::Ongoing,
            plies: 0,
        }
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.game.subscribe(observer);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn position(&self) -> &Position {
        self.game.position()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn bot_color(&self) -> Option<Color> {
        match self.mode {
            Mode::VersusBot { human } => Some(human.other()),
            Mode::TwoPlayers | Mode::Sandbox => None,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.bot_color() == Some(self.side_to_move)
    }

    /// Selects the piece on `square` and returns its legal destinations.
    ///
    /// Picking an empty square clears the selection and returns no hints.
    /// Picking an opponent's piece clears it too and is refused.
    pub fn select(&mut self, square: Square) -> Result<Vec<Square>, SessionError> {
        self.ensure_human_can_act()?;
        let Some(id) = self.position().piece_at(square) else {
            self.selected = None;
            return Ok(Vec::new());
        };
        if self.position().piece(id).color != self.side_to_move {
            self.selected = None;
            return Err(SessionError::NotYourTurn);
        }
        self.selected = Some(id);
        Ok(self.game.legal_moves(id))
    }

    /// Moves the selected piece. An illegal target keeps the selection.
    pub fn move_selected(&mut self, to: Square) -> Result<MoveOutcome, SessionError> {
        self.ensure_human_can_act()?;
        let id = self.selected.ok_or(SessionError::NothingSelected)?;
        let outcome = self.game.try_move(id, to)?;
        self.selected = None;
        self.started = true;
        if !outcome.promotion_pending {
            self.finish_turn(outcome.opponent_status);
        }
        Ok(outcome)
    }

    /// Resolves a pending promotion and passes the turn.
    pub fn promote(&mut self, kind: PieceKind) -> Result<PieceId, SessionError> {
        let id = self.game.complete_promotion(kind)?;
        let status = self.game.status(self.side_to_move.other());
        self.finish_turn(status);
        Ok(id)
    }

    /// Applies the bot's chosen move. Its promotions always become queens.
    pub fn apply_bot_move(&mut self, mv: Move) -> Result<MoveOutcome, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }
        if !self.is_bot_turn() {
            return Err(SessionError::NotYourTurn);
        }
        let outcome = self.game.try_move(mv.piece, mv.to)?;
        self.started = true;
        let status = if outcome.promotion_pending {
            self.game.complete_promotion(PieceKind::Queen)?;
            self.game.status(self.side_to_move.other())
        } else {
            outcome.opponent_status
        };
        self.finish_turn(status);
        Ok(outcome)
    }

    /// Places a piece in sandbox mode before the first move.
    pub fn place_piece(
        &mut self,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, SessionError> {
        self.ensure_setup_open()?;
        Ok(self.game.place_piece(square, kind, color)?)
    }

    /// Removes a non-king piece in sandbox mode before the first move.
    pub fn remove_piece(&mut self, square: Square) -> Result<PieceId, SessionError> {
        self.ensure_setup_open()?;
        if self
            .position()
            .occupant(square)
            .is_some_and(|p| p.kind == PieceKind::King)
        {
            return Err(SessionError::KingRemoval);
        }
        if self.selected.is_some() && self.position().piece_at(square) == self.selected {
            self.selected = None;
        }
        Ok(self.game.remove_piece(square)?)
    }

    fn ensure_human_can_act(&self) -> Result<(), SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.is_bot_turn() {
            return Err(SessionError::BotTurn);
        }
        if let Some(pawn) = self.game.pending_promotion() {
            return Err(MoveError::PromotionPending {
                square: self.position().square_of(pawn),
            }
            .into());
        }
        Ok(())
    }

    fn ensure_setup_open(&self) -> Result<(), SessionError> {
        if self.mode != Mode::Sandbox || self.started {
            return Err(SessionError::SetupLocked);
        }
        Ok(())
    }

    fn finish_turn(&mut self, opponent_status: GameStatus) {
        let mover = self.side_to_move;
        self.plies += 1;
        self.side_to_move = mover.other();
        debug!(ply = self.plies, %mover, ?opponent_status, "turn passed");

        self.outcome = match opponent_status {
            GameStatus::Checkmate => Outcome::Checkmate { winner: mover },
            GameStatus::Stalemate => Outcome::Stalemate,
            GameStatus::Check | GameStatus::Ongoing => Outcome::Ongoing,
        };
        if self.outcome.is_over() {
            info!(outcome = ?self.outcome, plies = self.plies, "game over");
        }
    }
}

/// Two lone kings on their home squares.
const SANDBOX_PLACEMENT: &str = "4k3/8/8/8/8/8/8/4K3";

fn sandbox_start() -> Position {
    match Position::from_placement(SANDBOX_PLACEMENT) {
        Ok(position) => position,
        Err(err) => panic!("sandbox placement {SANDBOX_PLACEMENT:?} is invalid: {err}"),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

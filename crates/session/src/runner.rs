//! Self-play runner for playing games between engines

use std::fmt;

use castellan_core::{Color, Engine, Game, GameStatus, PieceKind};
use minimax_bot::{BotConfig, MinimaxBot};
use random_bot::RandomBot;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{OpponentKind, SelfPlayConfig};
use crate::error::SessionError;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    WhiteMates,
    BlackMates,
    Stalemate,
    /// Stopped at the ply limit.
    MoveLimit,
}

impl GameEnd {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameEnd::WhiteMates => Some(Color::White),
            GameEnd::BlackMates => Some(Color::Black),
            GameEnd::Stalemate | GameEnd::MoveLimit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub number: u32,
    pub white: String,
    pub black: String,
    pub end: GameEnd,
    pub plies: u32,
}

/// Results from the first engine's perspective.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayReport {
    pub first: String,
    pub second: String,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl SelfPlayReport {
    pub fn total_games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Self-play: {} vs {} ===", self.first, self.second)?;
        for record in &self.games {
            let result = match record.end {
                GameEnd::WhiteMates => "1-0",
                GameEnd::BlackMates => "0-1",
                GameEnd::Stalemate | GameEnd::MoveLimit => "1/2",
            };
            writeln!(
                f,
                "Game {}: {} (W) vs {} (B): {} after {} plies ({:?})",
                record.number, record.white, record.black, result, record.plies, record.end
            )?;
        }
        write!(
            f,
            "{}: {} wins, {} losses, {} draws",
            self.first, self.first_wins, self.second_wins, self.draws
        )
    }
}

/// Builds the engine named by `kind`. Seeded configs give the opponent a
/// different seed from the first bot.
pub fn opponent_engine(kind: OpponentKind, bot: &BotConfig) -> Box<dyn Engine> {
    let seed = bot.seed.map(|s| s.wrapping_add(1));
    match kind {
        OpponentKind::Minimax => Box::new(MinimaxBot::new(BotConfig {
            seed,
            ..bot.clone()
        })),
        OpponentKind::Random => Box::new(RandomBot::new(seed)),
    }
}

/// Plays configured games between two engines through the move executor.
pub struct SelfPlay {
    config: SelfPlayConfig,
    bot: BotConfig,
}

impl SelfPlay {
    pub fn new(config: SelfPlayConfig, bot: BotConfig) -> Self {
        Self { config, bot }
    }

    /// Runs every game, returning results from `first`'s perspective.
    pub fn run(
        &self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<SelfPlayReport, SessionError> {
        let mut report = SelfPlayReport {
            first: first.name().to_string(),
            second: second.name().to_string(),
            ..SelfPlayReport::default()
        };

        for index in 0..self.config.games {
            let first_white = !self.config.alternate_colors || index % 2 == 0;
            let (end, plies) = if first_white {
                self.play_game(first, second)?
            } else {
                self.play_game(second, first)?
            };

            let first_color = if first_white { Color::White } else { Color::Black };
            match end.winner() {
                Some(winner) if winner == first_color => report.first_wins += 1,
                Some(_) => report.second_wins += 1,
                None => report.draws += 1,
            }

            let (white, black) = if first_white {
                (&report.first, &report.second)
            } else {
                (&report.second, &report.first)
            };
            let record = GameRecord {
                number: index + 1,
                white: white.clone(),
                black: black.clone(),
                end,
                plies,
            };
            info!(game = record.number, ?end, plies, "game finished");
            report.games.push(record);
        }
        Ok(report)
    }

    /// Plays one game from the standard position; returns how it ended and
    /// the plies played.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<(GameEnd, u32), SessionError> {
        let mut game = Game::standard();
        white.new_game();
        black.new_game();
        info!(white = white.name(), black = black.name(), "game started");

        let mut side = Color::White;
        for ply in 0..self.config.max_plies {
            // Fresh limits per move restart the clock.
            let limits = self.bot.limits();
            let result = match side {
                Color::White => white.search(game.position(), side, limits),
                Color::Black => black.search(game.position(), side, limits),
            };
            let Some(mv) = result.best_move else {
                return Ok((GameEnd::Stalemate, ply));
            };

            let outcome = game.try_move(mv.piece, mv.to)?;
            let status = if outcome.promotion_pending {
                game.complete_promotion(PieceKind::Queen)?;
                game.status(side.other())
            } else {
                outcome.opponent_status
            };
            debug!(ply = ply + 1, %side, from = %outcome.from, to = %outcome.to, "ply");

            match status {
                GameStatus::Checkmate => {
                    let end = match side {
                        Color::White => GameEnd::WhiteMates,
                        Color::Black => GameEnd::BlackMates,
                    };
                    return Ok((end, ply + 1));
                }
                GameStatus::Stalemate => return Ok((GameEnd::Stalemate, ply + 1)),
                GameStatus::Check | GameStatus::Ongoing => {}
            }
            side = side.other();
        }
        Ok((GameEnd::MoveLimit, self.config.max_plies))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;

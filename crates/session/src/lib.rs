//! Session layer for Castellan
//!
//! This crate composes the rules engine into playable games:
//! - Turn policy for two players, player versus bot, and a sandbox
//! - A background worker that runs bot searches off the caller's task
//! - TOML configuration and a self-play runner
//!
//! # Usage
//!
//! ```bash
//! # Two games of minimax against a random mover, depth 2
//! cargo run -p castellan_session --bin selfplay -- --opponent random --depth 2
//! ```

mod config;
mod error;
mod runner;
mod session;
mod worker;

pub use config::*;
pub use error::*;
pub use runner::*;
pub use session::*;
pub use worker::*;

//! Gametime Fantasy Football CLI Library
//!
//! A Rust library and CLI for the Gametime fantasy football dashboard:
//! resolve a Sleeper username, pull the user's leagues and rosters, and
//! cross-reference the global player directory and the weekly NFL schedule
//! to show which starters are on the field, already played, or yet to play.
//!
//! ## Features
//!
//! - **User Resolution**: Look up a Sleeper account by username
//! - **League & Roster Retrieval**: All leagues for a season, with each
//!   league's rosters fetched best-effort
//! - **Roster/Schedule Join Engine**: Pure aggregation of starters across
//!   leagues with ownership counts, opponent resolution, and live /
//!   finished / upcoming game bucketing
//! - **Weekly Schedule**: Current-week games from a proxy feed with a
//!   fallback mirror
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gametime_ffl::{commands::starters::handle_starters, Season};
//!
//! # async fn example() -> gametime_ffl::Result<()> {
//! handle_starters(Some("gridironguru".to_string()), Season::current(), false, false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper username to avoid passing it in every command:
//! ```bash
//! export GAMETIME_FFL_USERNAME=gridironguru
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod schedule;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, SeasonPhase, UserId, Week};
pub use engine::{BucketedStarters, GameBucket, GameSlot, StarterReport, StarterRow};
pub use error::{GametimeError, Result};
pub use sleeper::types::{League, PlayerDirectory, PlayerRecord, Roster, SleeperUser};

pub const USERNAME_ENV_VAR: &str = "GAMETIME_FFL_USERNAME";

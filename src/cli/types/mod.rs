//! Type-safe wrappers and enums for Sleeper fantasy football data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, UserId};
pub use position::Position;
pub use time::{Season, SeasonPhase, Week};

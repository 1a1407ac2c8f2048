//! Weekly NFL schedule feed: payload types and fetch functions.

pub mod http;
pub mod types;

pub use types::{Game, ScheduleFeed, TeamSide, WeekSchedule};

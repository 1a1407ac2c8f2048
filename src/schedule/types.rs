//! Payload types for the weekly schedule feed.
//!
//! The feed mirrors Sportradar's current-week shape: week metadata plus a
//! flat list of games, each with two sides and a kickoff timestamp. An
//! empty games list is a valid feed (offseason, feed not yet published).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::types::Week;

/// Top-level schedule payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleFeed {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(rename = "type", default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub week: WeekSchedule,
}

impl ScheduleFeed {
    /// Placeholder feed used when no schedule could be fetched.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One week of games plus display metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WeekSchedule {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sequence: Option<Week>,
    #[serde(default)]
    pub games: Vec<Game>,
}

/// A single scheduled game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub scheduled: Option<DateTime<Utc>>,
    pub home: TeamSide,
    pub away: TeamSide,
    #[serde(default)]
    pub venue: Option<Venue>,
}

/// One side of a game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamSide {
    /// Full display name, e.g. "Kansas City Chiefs".
    pub name: String,
    /// Team abbreviation, e.g. "KC". Matches Sleeper's `team` field.
    pub alias: String,
}

/// Where a game is played. Display only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

//! Payload types for the Sleeper API.
//!
//! Sleeper is loose with absent fields (players routinely have no team,
//! no jersey number, or no search rank), so everything the dashboard only
//! displays is optional and normalized at this boundary rather than inside
//! the engine.

use crate::cli::types::{LeagueId, PlayerId, Position, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(test)]
mod tests;

/// Base URL for Sleeper avatar images.
pub const AVATAR_BASE_URL: &str = "https://sleepercdn.com/avatars";

/// Resolved Sleeper user from `/v1/user/{username}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SleeperUser {
    /// Name to show for this user, falling back when Sleeper omits it.
    pub fn display_name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Unknown User")
    }

    /// Full CDN URL for the user's avatar, when they have one.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_deref()
            .map(|a| format!("{AVATAR_BASE_URL}/{a}"))
    }
}

/// Raw league entry from `/v1/user/{user_id}/leagues/nfl/{season}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperLeague {
    pub league_id: LeagueId,
    pub name: String,
    pub total_rosters: u16,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One user's team within one league.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub starters: Vec<PlayerId>,
    #[serde(default)]
    pub settings: RosterSettings,
}

/// Season aggregate stats attached to a roster.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u16,
    #[serde(default)]
    pub losses: u16,
    #[serde(default)]
    pub ties: u16,
    #[serde(default)]
    pub fpts: i32,
}

/// A league with its roster collection.
///
/// `rosters` stays `None` until the per-league roster fetch lands; the
/// engine skips leagues still in that state.
#[derive(Debug, Clone)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
    pub number_of_teams: u16,
    pub avatar: Option<String>,
    pub rosters: Option<Vec<Roster>>,
}

impl From<SleeperLeague> for League {
    fn from(raw: SleeperLeague) -> Self {
        Self {
            league_id: raw.league_id,
            league_name: raw.name,
            number_of_teams: raw.total_rosters,
            avatar: raw.avatar,
            rosters: None,
        }
    }
}

impl League {
    /// The roster owned by `user_id`, if rosters are loaded and one matches.
    ///
    /// First match wins if the data erroneously lists the same owner twice.
    pub fn roster_for(&self, user_id: &UserId) -> Option<&Roster> {
        self.rosters
            .as_ref()?
            .iter()
            .find(|r| r.owner_id.as_ref() == Some(user_id))
    }
}

/// Player attributes from the `/v1/players/nfl` directory.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub number: Option<u16>,
    #[serde(default)]
    pub search_rank: Option<u32>,
}

impl PlayerRecord {
    /// The position parsed into the dashboard's known set.
    ///
    /// Sleeper also carries positions the dashboard never displays on a
    /// fantasy lineup (OL, LS, IDP slots); those come back `None` and the
    /// raw string is still available for display.
    pub fn parsed_position(&self) -> Option<Position> {
        self.position.as_deref()?.parse().ok()
    }

    /// Whether this record is a team defensive unit rather than a person.
    pub fn is_defense(&self) -> bool {
        self.parsed_position().is_some_and(|p| p.is_team_unit())
    }

    /// Name to display: team defenses use the team name, unknown players
    /// fall back to a placeholder.
    pub fn display_name(&self) -> String {
        if self.is_defense() {
            match &self.team {
                Some(team) => format!("{} Defense", team),
                None => "Unknown Defense".to_string(),
            }
        } else {
            self.full_name
                .clone()
                .unwrap_or_else(|| "Unknown Player".to_string())
        }
    }

    /// Anything other than an explicit "Active" status counts as inactive.
    pub fn is_inactive(&self) -> bool {
        matches!(&self.status, Some(s) if s != "Active")
    }
}

/// The full player directory, keyed by player ID.
pub type PlayerDirectory = HashMap<PlayerId, PlayerRecord>;

//! Fantasy football position types.
//!
//! Sleeper reports positions as plain strings ("QB", "DEF", ...); this enum
//! normalizes the ones the dashboard displays. `DEF` marks a team defensive
//! unit, which is named after its team rather than a person.

use crate::error::GametimeError;
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Whether this position represents a whole-team unit.
    pub fn is_team_unit(&self) -> bool {
        matches!(self, Position::DEF)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = GametimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            other => Err(GametimeError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}

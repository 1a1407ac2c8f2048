//! ID types for Sleeper fantasy football.
//!
//! Sleeper identifiers are opaque strings: user and league IDs are numeric
//! strings, player IDs are numeric strings for individuals and team aliases
//! (e.g. "KC") for defensive units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper user IDs.
///
/// # Examples
///
/// ```rust
/// use gametime_ffl::UserId;
///
/// let user_id = UserId::new("862136541229834240");
/// assert_eq!(user_id.as_str(), "862136541229834240");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new UserId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for Sleeper league IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Sleeper player IDs.
///
/// Orderable so it can serve as the final sort tie-break when ranking
/// starters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::new("123456789");
        assert_eq!(id.as_str(), "123456789");
        assert_eq!(id.to_string(), "123456789");
    }

    #[test]
    fn test_player_id_ordering_is_lexical() {
        let a = PlayerId::new("100");
        let b = PlayerId::new("20");
        // Lexical, not numeric: "100" < "20"
        assert!(a < b);
    }

    #[test]
    fn test_player_id_serde_transparent() {
        let id: PlayerId = serde_json::from_str("\"4046\"").unwrap();
        assert_eq!(id, PlayerId::new("4046"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4046\"");
    }
}

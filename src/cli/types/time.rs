//! Season and week types for NFL fantasy football.
//!
//! NFL seasons span calendar years: the 2024 season starts in August 2024
//! and its playoffs run into February 2025. The helpers here pin a date to
//! the season year and phase it belongs to.

use crate::error::{GametimeError, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NFL season years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Season year that `date` falls in.
    ///
    /// January and February belong to the previous calendar year's season
    /// (playoffs); March onward counts toward the upcoming season.
    pub fn for_date(date: DateTime<Utc>) -> Self {
        let year = date.year() as u16;
        if date.month() <= 2 {
            Self(year - 1)
        } else {
            Self(year)
        }
    }

    /// The current NFL season based on wall-clock time.
    pub fn current() -> Self {
        Self::for_date(Utc::now())
    }

    /// Classify a date within this season.
    pub fn phase_of(&self, date: DateTime<Utc>) -> SeasonPhase {
        let year = date.year() as u16;
        let month = date.month();
        let day = date.day();

        let preseason =
            (year == self.0 && month == 8) || (year == self.0 && month == 9 && day <= 10);
        let regular = (year == self.0 && (9..=12).contains(&month) && !(month == 9 && day <= 10))
            || (year == self.0 + 1 && month == 1 && day <= 7);
        let playoffs =
            (year == self.0 + 1 && month == 1 && day > 7) || (year == self.0 + 1 && month == 2);

        if preseason {
            SeasonPhase::Preseason
        } else if regular {
            SeasonPhase::Regular
        } else if playoffs {
            SeasonPhase::Playoffs
        } else {
            SeasonPhase::Offseason
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = GametimeError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| GametimeError::InvalidSeason {
                year: s.to_string(),
            })
    }
}

/// Phase of the NFL calendar a date falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonPhase {
    Preseason,
    Regular,
    Playoffs,
    Offseason,
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeasonPhase::Preseason => "preseason",
            SeasonPhase::Regular => "regular",
            SeasonPhase::Playoffs => "playoffs",
            SeasonPhase::Offseason => "offseason",
        };
        write!(f, "{}", s)
    }
}

/// Type-safe wrapper for week numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = GametimeError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| GametimeError::InvalidWeek {
                week: s.to_string(),
            })
    }
}

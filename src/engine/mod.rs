//! Roster aggregation and game-bucket engine.
//!
//! Pure, synchronous joins over already-fetched inputs: the user's leagues
//! (each with a possibly-unloaded roster collection), the player directory,
//! and the weekly schedule. Every lookup has a defined fallback, so the
//! pipeline is total over its input domain: partial data always produces a
//! partial-but-valid result, never an error.
//!
//! The upstream fetches are independent and uncoordinated, so any of the
//! inputs may be empty or missing when a command runs the engine. Each
//! invocation recomputes the full result from scratch; identical inputs
//! yield identical output.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::cli::types::{PlayerId, UserId};
use crate::schedule::types::WeekSchedule;
use crate::sleeper::types::{League, PlayerDirectory, PlayerRecord};


/// How long after kickoff a game is presumed in progress.
///
/// There is no live game-clock feed; four hours comfortably covers an NFL
/// game plus overtime.
pub const LIVE_WINDOW_HOURS: i64 = 4;

/// The presumed-in-progress window as a [`Duration`].
pub fn live_window() -> Duration {
    Duration::hours(LIVE_WINDOW_HOURS)
}

/// A starter's resolved game: kickoff time and opposing team name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSlot {
    pub scheduled: Option<DateTime<Utc>>,
    pub opponent: String,
}

/// Weekly game-status classification for a starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameBucket {
    /// Kicked off within the live window and not in the future.
    Live,
    /// Kicked off before the live window opened.
    Finished,
    /// Kickoff is in the future, or no game was resolved (bye week,
    /// unknown team, feed missing).
    Upcoming,
}

/// Count how many of the user's leagues start each player.
///
/// Leagues whose rosters have not arrived yet are skipped; with no user ID
/// nothing matches and the result is empty. At most one roster per league
/// is expected to match the owner; the first one encountered wins.
pub fn aggregate_starters(
    leagues: &[League],
    user_id: Option<&UserId>,
) -> HashMap<PlayerId, u32> {
    let mut counts: HashMap<PlayerId, u32> = HashMap::new();
    let Some(user_id) = user_id else {
        return counts;
    };

    for league in leagues {
        if let Some(roster) = league.roster_for(user_id) {
            for starter in &roster.starters {
                *counts.entry(starter.clone()).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Order the aggregated starters for display.
///
/// Two-key sort: league-ownership count descending (more stakes first),
/// then directory `search_rank` ascending with a missing rank sorting
/// last. Player ID breaks any remaining tie so the order is total and
/// repeatable.
pub fn rank_starters(counts: &HashMap<PlayerId, u32>, players: &PlayerDirectory) -> Vec<PlayerId> {
    let mut ranked: Vec<PlayerId> = counts.keys().cloned().collect();
    ranked.sort_by(|a, b| {
        let count_a = counts.get(a).copied().unwrap_or(0);
        let count_b = counts.get(b).copied().unwrap_or(0);
        let rank_of = |id: &PlayerId| {
            players
                .get(id)
                .and_then(|p| p.search_rank)
                .map(u64::from)
                .unwrap_or(u64::MAX)
        };
        count_b
            .cmp(&count_a)
            .then_with(|| rank_of(a).cmp(&rank_of(b)))
            .then_with(|| a.cmp(b))
    });
    ranked
}

/// Find the game a team plays this week.
///
/// Matches the team abbreviation against either side of each game; the
/// opponent is the *other* side's full name. A team is expected to appear
/// in at most one game per week; if the feed erroneously lists two, the
/// first wins. No team or no match means "no game", which callers treat
/// as unknown rather than an error.
pub fn resolve_game(team: Option<&str>, week: &WeekSchedule) -> Option<GameSlot> {
    let team = team?;
    week.games.iter().find_map(|game| {
        if game.home.alias == team {
            Some(GameSlot {
                scheduled: game.scheduled,
                opponent: game.away.name.clone(),
            })
        } else if game.away.alias == team {
            Some(GameSlot {
                scheduled: game.scheduled,
                opponent: game.home.name.clone(),
            })
        } else {
            None
        }
    })
}

/// Classify one resolved game (or the lack of one) against `now`.
///
/// The live window is inclusive at both ends: a kickoff at exactly
/// `now - 4h` or exactly `now` is live. Unresolved games and games with
/// no kickoff time land in upcoming, never live or finished.
pub fn classify(slot: Option<&GameSlot>, now: DateTime<Utc>) -> GameBucket {
    match slot.and_then(|s| s.scheduled) {
        None => GameBucket::Upcoming,
        Some(kickoff) if kickoff > now => GameBucket::Upcoming,
        Some(kickoff) if kickoff >= now - live_window() => GameBucket::Live,
        Some(_) => GameBucket::Finished,
    }
}

/// Ranked player IDs partitioned by game bucket.
///
/// Each list preserves the relative order established by
/// [`rank_starters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BucketedStarters {
    pub live: Vec<PlayerId>,
    pub finished: Vec<PlayerId>,
    pub upcoming: Vec<PlayerId>,
}

/// Partition ranked starters into live / finished / upcoming.
pub fn bucket_players(
    ranked: &[PlayerId],
    players: &PlayerDirectory,
    week: &WeekSchedule,
    now: DateTime<Utc>,
) -> BucketedStarters {
    let mut buckets = BucketedStarters::default();
    for player_id in ranked {
        let team = players.get(player_id).and_then(|p| p.team.as_deref());
        let slot = resolve_game(team, week);
        match classify(slot.as_ref(), now) {
            GameBucket::Live => buckets.live.push(player_id.clone()),
            GameBucket::Finished => buckets.finished.push(player_id.clone()),
            GameBucket::Upcoming => buckets.upcoming.push(player_id.clone()),
        }
    }
    buckets
}

/// One displayable starter row with all of its annotations.
#[derive(Debug, Clone, Serialize)]
pub struct StarterRow {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub status: Option<String>,
    pub number: Option<u16>,
    pub inactive: bool,
    pub leagues_owned: u32,
    pub scheduled: Option<DateTime<Utc>>,
    pub opponent: Option<String>,
}

/// The engine's full output: annotated rows partitioned by bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StarterReport {
    pub live: Vec<StarterRow>,
    pub finished: Vec<StarterRow>,
    pub upcoming: Vec<StarterRow>,
}

impl StarterReport {
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.finished.is_empty() && self.upcoming.is_empty()
    }
}

fn build_row(
    player_id: &PlayerId,
    counts: &HashMap<PlayerId, u32>,
    players: &PlayerDirectory,
    week: &WeekSchedule,
) -> StarterRow {
    let unknown = PlayerRecord::default();
    let player = players.get(player_id).unwrap_or(&unknown);
    let slot = resolve_game(player.team.as_deref(), week);

    StarterRow {
        player_id: player_id.clone(),
        name: player.display_name(),
        position: player.position.clone(),
        team: player.team.clone(),
        status: player.status.clone(),
        number: player.number,
        inactive: player.is_inactive(),
        leagues_owned: counts.get(player_id).copied().unwrap_or(0),
        scheduled: slot.as_ref().and_then(|s| s.scheduled),
        opponent: slot.map(|s| s.opponent),
    }
}

/// Run the whole pipeline: aggregate, rank, bucket, annotate.
pub fn build_report(
    leagues: &[League],
    user_id: Option<&UserId>,
    players: &PlayerDirectory,
    week: &WeekSchedule,
    now: DateTime<Utc>,
) -> StarterReport {
    let counts = aggregate_starters(leagues, user_id);
    let ranked = rank_starters(&counts, players);
    let buckets = bucket_players(&ranked, players, week, now);

    let rows = |ids: &[PlayerId]| {
        ids.iter()
            .map(|id| build_row(id, &counts, players, week))
            .collect()
    };

    StarterReport {
        live: rows(&buckets.live),
        finished: rows(&buckets.finished),
        upcoming: rows(&buckets.upcoming),
    }
}

//! HTTP fetch functions for the Sleeper API.

use reqwest::Client;

use crate::cli::types::{LeagueId, Season, UserId};
use crate::error::{GametimeError, Result};
use crate::sleeper::types::{PlayerDirectory, Roster, SleeperLeague, SleeperUser};

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Resolve a username to a Sleeper user.
///
/// Sleeper answers unknown usernames with `null` rather than a 404, so a
/// successful-but-empty body maps to [`GametimeError::UserNotFound`].
pub async fn get_user(client: &Client, username: &str) -> Result<SleeperUser> {
    let url = format!("{SLEEPER_BASE_URL}/user/{username}");

    let user: Option<SleeperUser> = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    user.ok_or_else(|| GametimeError::UserNotFound {
        username: username.to_string(),
    })
}

/// Fetch the user's NFL leagues for a season.
pub async fn get_leagues(
    client: &Client,
    user_id: &UserId,
    season: Season,
) -> Result<Vec<SleeperLeague>> {
    let url = format!(
        "{SLEEPER_BASE_URL}/user/{}/leagues/nfl/{}",
        user_id,
        season.as_u16()
    );

    let leagues: Option<Vec<SleeperLeague>> = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(leagues.unwrap_or_default())
}

/// Fetch all rosters in a league.
pub async fn get_rosters(client: &Client, league_id: &LeagueId) -> Result<Vec<Roster>> {
    let url = format!("{SLEEPER_BASE_URL}/league/{league_id}/rosters");

    let rosters: Vec<Roster> = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(rosters)
}

/// Fetch the full NFL player directory.
///
/// This is a large payload (several MB); Sleeper asks clients to pull it at
/// most once per session, which is exactly how the commands use it.
pub async fn get_player_directory(client: &Client) -> Result<PlayerDirectory> {
    let url = format!("{SLEEPER_BASE_URL}/players/nfl");

    let directory: PlayerDirectory = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(directory)
}

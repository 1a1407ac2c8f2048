//! HTTP fetch for the weekly schedule feed.

use reqwest::Client;

use crate::error::Result;
use crate::schedule::types::ScheduleFeed;

/// Primary schedule proxy. Overridable with `GAMETIME_FFL_SCHEDULE_URL`
/// for self-hosted deployments.
pub const SCHEDULE_PRIMARY_URL: &str =
    "https://shielded-journey-91279-c0d1ba13fd56.herokuapp.com/api";

/// Mirror of the same feed, tried when the primary is unreachable.
pub const SCHEDULE_FALLBACK_URL: &str = "https://gametime-schedule.fly.dev/api";

/// Env var overriding the primary schedule URL.
pub const SCHEDULE_URL_ENV_VAR: &str = "GAMETIME_FFL_SCHEDULE_URL";

async fn fetch_feed(client: &Client, url: &str) -> Result<ScheduleFeed> {
    let feed: ScheduleFeed = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(feed)
}

/// Fetch the current week's schedule, trying the fallback mirror if the
/// primary fails. Returns the primary's error only when both fail.
pub async fn get_schedule(client: &Client) -> Result<ScheduleFeed> {
    let primary =
        std::env::var(SCHEDULE_URL_ENV_VAR).unwrap_or_else(|_| SCHEDULE_PRIMARY_URL.to_string());

    match fetch_feed(client, &primary).await {
        Ok(feed) => Ok(feed),
        Err(primary_err) => match fetch_feed(client, SCHEDULE_FALLBACK_URL).await {
            Ok(feed) => Ok(feed),
            Err(_) => Err(primary_err),
        },
    }
}

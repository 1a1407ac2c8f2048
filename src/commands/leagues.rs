//! Leagues command: per-league summary with the user's season record.

use serde::Serialize;

use super::{common::DashboardContext, resolve_username};
use crate::cli::types::{Season, UserId};
use crate::error::Result;
use crate::sleeper::types::League;

/// One league row, shaped for printing and JSON output.
#[derive(Debug, Serialize)]
struct LeagueSummary {
    league_id: String,
    name: String,
    teams: u16,
    avatar: Option<String>,
    /// "7-3-1" style record, absent when the user's roster is unknown.
    record: Option<String>,
    fpts: Option<i32>,
}

fn summarize(league: &League, user_id: &UserId) -> LeagueSummary {
    let roster = league.roster_for(user_id);
    LeagueSummary {
        league_id: league.league_id.to_string(),
        name: league.league_name.clone(),
        teams: league.number_of_teams,
        avatar: league.avatar.clone(),
        record: roster.map(|r| {
            format!(
                "{}-{}-{}",
                r.settings.wins, r.settings.losses, r.settings.ties
            )
        }),
        fpts: roster.map(|r| r.settings.fpts),
    }
}

/// Handle the leagues command
pub async fn handle_leagues(
    username: Option<String>,
    season: Season,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let username = resolve_username(username)?;
    let client = super::common::build_client()?;

    let ctx = DashboardContext::load_rosters(&client, &username, season, verbose).await?;

    let summaries: Vec<LeagueSummary> = ctx
        .leagues
        .iter()
        .map(|league| summarize(league, &ctx.user.user_id))
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!(
            "No leagues found for {} in season {}.",
            ctx.user.display_name_or_default(),
            season
        );
        return Ok(());
    }

    println!(
        "{}'s Leagues - Season {}",
        ctx.user.display_name_or_default(),
        season
    );
    println!("{:<34} {:<6} {:<8} Points", "League", "Teams", "Record");
    println!("{:<34} {:<6} {:<8} ------", "------", "-----", "------");
    for summary in &summaries {
        println!(
            "{:<34} {:<6} {:<8} {}",
            summary.name.chars().take(34).collect::<String>(),
            summary.teams,
            summary.record.as_deref().unwrap_or("N/A"),
            summary
                .fpts
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        );
    }

    Ok(())
}

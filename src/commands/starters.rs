//! Starters command: the weekly dashboard tables.

use chrono::{DateTime, Utc};

use super::{common::DashboardContext, resolve_username};
use crate::cli::types::Season;
use crate::engine::{build_report, StarterRow};
use crate::error::Result;

/// Render a kickoff timestamp the way the dashboard shows it.
fn format_kickoff(scheduled: Option<DateTime<Utc>>) -> String {
    match scheduled {
        Some(t) => t.format("%A %-m/%-d %-I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn print_table(title: &str, rows: &[StarterRow]) {
    println!("{}", title);
    println!(
        "{:<26} {:<5} {:<5} {:<16} {:<4} {:<8} {:<22} Opponent",
        "Name", "Pos", "Team", "Status", "No.", "Leagues", "Kickoff"
    );
    println!(
        "{:<26} {:<5} {:<5} {:<16} {:<4} {:<8} {:<22} --------",
        "----", "---", "----", "------", "---", "-------", "-------"
    );

    for row in rows {
        let number = row
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let status = if row.inactive {
            format!("{} (!)", or_na(row.status.as_deref()))
        } else {
            or_na(row.status.as_deref()).to_string()
        };
        println!(
            "{:<26} {:<5} {:<5} {:<16} {:<4} {:<8} {:<22} {}",
            row.name.chars().take(26).collect::<String>(),
            or_na(row.position.as_deref()),
            or_na(row.team.as_deref()),
            status,
            number,
            row.leagues_owned,
            format_kickoff(row.scheduled),
            or_na(row.opponent.as_deref()),
        );
    }
    println!();
}

/// Handle the starters command
pub async fn handle_starters(
    username: Option<String>,
    season: Season,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let username = resolve_username(username)?;
    let client = super::common::build_client()?;

    let ctx = DashboardContext::load(&client, &username, season, verbose).await?;

    let report = build_report(
        &ctx.leagues,
        Some(&ctx.user.user_id),
        &ctx.players,
        &ctx.schedule.week,
        Utc::now(),
    );

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let display_name = ctx.user.display_name_or_default();
    if report.is_empty() {
        println!("No players to display.");
        return Ok(());
    }

    if !report.live.is_empty() {
        print_table(
            &format!("{}'s Starters - On the Field", display_name),
            &report.live,
        );
    }
    if !report.finished.is_empty() {
        print_table(
            &format!("{}'s Starters - Already Played", display_name),
            &report.finished,
        );
    }
    if !report.upcoming.is_empty() {
        print_table(
            &format!("{}'s Starters - Yet to Play", display_name),
            &report.upcoming,
        );
    }

    Ok(())
}

//! Week command: this week's NFL schedule.

use chrono::Utc;

use crate::cli::types::Season;
use crate::error::Result;
use crate::schedule;

/// Handle the week command
pub async fn handle_week(as_json: bool) -> Result<()> {
    let client = super::common::build_client()?;

    let feed = schedule::http::get_schedule(&client).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    let season = Season::current();
    let title = feed
        .week
        .title
        .clone()
        .or_else(|| feed.week.sequence.map(|n| format!("Week {}", n)))
        .unwrap_or_else(|| "Current Week".to_string());
    println!(
        "{} - season {} ({})",
        title,
        feed.year.unwrap_or_else(|| season.as_u16()),
        season.phase_of(Utc::now())
    );
    println!();

    if feed.week.games.is_empty() {
        println!("No games scheduled.");
        return Ok(());
    }

    for game in &feed.week.games {
        let kickoff = match game.scheduled {
            Some(t) => t.format("%a %-m/%-d %-I:%M %p").to_string(),
            None => "TBD".to_string(),
        };
        let status = game.status.as_deref().unwrap_or("scheduled");
        println!(
            "{:<24} @ {:<24} {:<20} {}",
            game.away.name, game.home.name, kickoff, status
        );
    }

    Ok(())
}

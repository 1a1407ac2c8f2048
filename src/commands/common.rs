//! Shared command plumbing: HTTP client setup and dashboard data assembly.
//!
//! The three upstream feeds (rosters, player directory, schedule) are
//! independent best-effort fetches. A failed optional feed leaves its slot
//! in an empty/default state and the commands render whatever arrived; only
//! the username resolution itself is a hard failure.

use reqwest::Client;

use crate::cli::types::Season;
use crate::error::Result;
use crate::schedule::{self, types::ScheduleFeed};
use crate::sleeper::{
    http as sleeper_http,
    types::{League, PlayerDirectory, SleeperUser},
};

/// Build the shared HTTP client for one command run.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("gametime-ffl/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Everything a dashboard command needs, fetched up front.
pub struct DashboardContext {
    pub user: SleeperUser,
    pub leagues: Vec<League>,
    pub players: PlayerDirectory,
    pub schedule: ScheduleFeed,
}

impl DashboardContext {
    /// Resolve the user and fetch leagues + rosters.
    ///
    /// Roster fetches are per-league best-effort: a failed league keeps
    /// `rosters = None` and the engine skips it.
    pub async fn load_rosters(
        client: &Client,
        username: &str,
        season: Season,
        verbose: bool,
    ) -> Result<Self> {
        if verbose {
            println!("Resolving Sleeper user '{}'...", username);
        }
        let user = sleeper_http::get_user(client, username).await?;
        if verbose {
            println!(
                "✓ Found {} ({})",
                user.display_name_or_default(),
                user.user_id
            );
            if let Some(url) = user.avatar_url() {
                println!("  Avatar: {}", url);
            }
        }

        let mut leagues: Vec<League> = match sleeper_http::get_leagues(client, &user.user_id, season).await
        {
            Ok(raw) => raw.into_iter().map(League::from).collect(),
            Err(e) => {
                eprintln!("⚠ Could not fetch leagues for season {}: {}", season, e);
                Vec::new()
            }
        };
        if verbose {
            println!("✓ Loaded {} league(s) for season {}", leagues.len(), season);
        }

        for league in &mut leagues {
            match sleeper_http::get_rosters(client, &league.league_id).await {
                Ok(rosters) => league.rosters = Some(rosters),
                Err(e) => {
                    eprintln!(
                        "⚠ Could not fetch rosters for league {}: {}",
                        league.league_name, e
                    );
                }
            }
        }

        Ok(Self {
            user,
            leagues,
            players: PlayerDirectory::new(),
            schedule: ScheduleFeed::empty(),
        })
    }

    /// Full dashboard load: rosters plus player directory and schedule.
    pub async fn load(
        client: &Client,
        username: &str,
        season: Season,
        verbose: bool,
    ) -> Result<Self> {
        let mut ctx = Self::load_rosters(client, username, season, verbose).await?;

        if verbose {
            println!("Fetching player directory (this is a large download)...");
        }
        match sleeper_http::get_player_directory(client).await {
            Ok(players) => {
                if verbose {
                    println!("✓ Player directory loaded ({} players)", players.len());
                }
                ctx.players = players;
            }
            Err(e) => eprintln!("⚠ Could not fetch player directory: {}", e),
        }

        match schedule::http::get_schedule(client).await {
            Ok(feed) => {
                if verbose {
                    println!(
                        "✓ Schedule loaded ({} game(s) this week)",
                        feed.week.games.len()
                    );
                }
                ctx.schedule = feed;
            }
            Err(e) => eprintln!("⚠ Could not fetch schedule: {}", e),
        }

        Ok(ctx)
    }
}

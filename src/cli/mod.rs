//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::Season;

/// Common arguments shared between user-scoped commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Sleeper username (or set `GAMETIME_FFL_USERNAME` env var).
    #[clap(long, short)]
    pub username: Option<String>,

    /// Season year (defaults to the current NFL season).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Output results as JSON instead of text tables.
    #[clap(long)]
    pub json: bool,

    /// Show detailed progress information.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show the user's starters for the week, bucketed by game status.
    ///
    /// Resolves the username, joins every league's starting lineup against
    /// the player directory and the weekly schedule, and prints three
    /// tables: on the field, already played, yet to play.
    Starters {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// List the user's leagues with their season record and points.
    Leagues {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Show this week's NFL schedule.
    Week {
        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "gametime-ffl", about = "Gametime Fantasy Football dashboard CLI")]
pub struct Gametime {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Sleeper and the schedule feed
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

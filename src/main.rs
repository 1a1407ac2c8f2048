//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use gametime_ffl::{
    cli::{Commands, Gametime, GetCmd},
    commands::{leagues::handle_leagues, starters::handle_starters, week::handle_week},
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Gametime::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Starters { common } => {
                handle_starters(common.username, common.season, common.json, common.verbose)
                    .await?
            }

            GetCmd::Leagues { common } => {
                handle_leagues(common.username, common.season, common.json, common.verbose).await?
            }

            GetCmd::Week { json } => handle_week(json).await?,
        },
    }

    Ok(())
}

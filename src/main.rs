//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_info::{
    cli::{Commands, NbaInfo},
    commands::{
        collect::handle_collect,
        retry::handle_retry,
        show::{handle_players, handle_teams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaInfo::parse();

    match app.command {
        Commands::Collect { args } => handle_collect(args).await?,
        Commands::Retry { args } => handle_retry(args).await?,
        Commands::Players { db, active, json } => handle_players(db, active, json).await?,
        Commands::Teams { db, json } => handle_teams(db, json).await?,
    }

    Ok(())
}

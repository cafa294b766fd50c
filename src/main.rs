//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use bbref_stats::{
    cli::{BbrCli, Commands},
    commands::{
        players::{handle_players, PlayersParams},
        seasons::{handle_seasons, SeasonsParams},
    },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = BbrCli::parse();
    init_tracing(app.verbose)?;

    match app.command {
        Commands::Players {
            letters,
            concurrency,
            output,
            fetch,
        } => handle_players(PlayersParams {
            letters,
            concurrency,
            format: output.format,
            output: output.output,
            fetch: fetch.into_settings(),
        })
        .await
        .context("failed to collect the player roster")?,

        Commands::Seasons {
            locator,
            output,
            fetch,
        } => {
            let what = format!("failed to extract seasons for {locator}");
            handle_seasons(SeasonsParams {
                locator,
                format: output.format,
                output: output.output,
                fetch: fetch.into_settings(),
            })
            .await
            .context(what)?
        }
    }

    Ok(())
}

/// Log to stderr so stdout only carries command output.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose {
        "bbref_stats=debug,warn"
    } else {
        "bbref_stats=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to set tracing subscriber")
}

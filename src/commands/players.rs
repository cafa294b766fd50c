//! Roster listing command.

use std::path::PathBuf;

use tracing::info;

use crate::{
    bbref::{
        http::{FetchSettings, SiteClient},
        roster::RosterCollector,
    },
    cli::types::{IndexLetter, OutputFormat},
    core::{open_output, write_roster},
    Result,
};

/// Configuration for the roster listing.
#[derive(Debug)]
pub struct PlayersParams {
    /// Letters to visit; `None` means all 25.
    pub letters: Option<Vec<IndexLetter>>,
    pub concurrency: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub fetch: FetchSettings,
}

/// Collect the roster and write it out.
///
/// # Errors
///
/// Fails if any index page cannot be fetched or has no table body, or if the
/// output cannot be written. Nothing is written on a failed collection.
pub async fn handle_players(params: PlayersParams) -> Result<()> {
    let client = SiteClient::new(params.fetch)?;
    let mut collector = RosterCollector::new(client).with_concurrency(params.concurrency);
    if let Some(letters) = params.letters {
        collector = collector.with_letters(letters);
    }

    info!(
        letters = collector.letters().len(),
        concurrency = params.concurrency,
        "collecting roster"
    );
    let players = collector.collect_all_players().await?;

    let out = open_output(params.output.as_deref())?;
    write_roster(out, &players, params.format)?;

    if let Some(path) = &params.output {
        info!(players = players.len(), path = %path.display(), "roster written");
    }
    Ok(())
}

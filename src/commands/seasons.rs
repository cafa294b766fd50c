//! Per-game season table command.

use std::path::PathBuf;

use tracing::info;

use crate::{
    bbref::{
        http::{FetchSettings, SiteClient},
        seasons::SeasonStatsExtractor,
    },
    cli::types::{OutputFormat, PlayerLocator},
    core::{open_output, write_season_table},
    Result,
};

/// Configuration for one player's season table.
#[derive(Debug)]
pub struct SeasonsParams {
    pub locator: PlayerLocator,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub fetch: FetchSettings,
}

/// Fetch, clean and write one player's per-game table.
pub async fn handle_seasons(params: SeasonsParams) -> Result<()> {
    let client = SiteClient::new(params.fetch)?;
    let extractor = SeasonStatsExtractor::new(client);

    let table = extractor.extract_seasons(&params.locator).await?;
    if table.career().is_none() && !table.is_empty() {
        info!(locator = %params.locator, "no career row on page");
    }

    let out = open_output(params.output.as_deref())?;
    write_season_table(out, &table, params.format)?;

    if let Some(path) = &params.output {
        info!(rows = table.len(), path = %path.display(), "season table written");
    }
    Ok(())
}

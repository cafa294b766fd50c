//! Per-game season table extraction and cleanup.
//!
//! A player page renders the per-game table with one `th` season cell per
//! row followed by `td` stat cells. Traded players get a combined row plus
//! one row per team for that season, seasons missed entirely are rendered as
//! short rows, and the footer holds the career row followed by per-team
//! career rows. Cleanup turns this into one row per season plus `Career`:
//!
//! 1. [`drop_years_off`] removes the short rows.
//! 2. [`trim_career`] cuts everything after the career row.
//! 3. [`season_labels`] rebuilds the season column from the body `th` cells.
//! 4. [`drop_repeats`] keeps only the first row of each season.

use scraper::Html;
use tracing::{debug, info};

use crate::{
    bbref::{
        http::SiteClient,
        markup::{
            cell_text, is_career_team_cell, is_season_label, selector, team_column_index,
            CAREER_LABEL, TEAM_COLUMNS,
        },
        types::{PlayerSeasonTable, RawStatRow, SeasonRow},
    },
    cli::types::PlayerLocator,
    BbrError, Result,
};


/// Fetches player pages and cleans their per-game table.
#[derive(Debug, Clone)]
pub struct SeasonStatsExtractor {
    client: SiteClient,
}

impl SeasonStatsExtractor {
    pub fn new(client: SiteClient) -> Self {
        Self { client }
    }

    /// Fetch the page behind `locator` and return its cleaned season table.
    pub async fn extract_seasons(&self, locator: &PlayerLocator) -> Result<PlayerSeasonTable> {
        let url = locator.resolve(self.client.base_url());
        let html = self.client.fetch_page(&url).await?;
        let table = parse_per_game_page(&html)?;
        info!(%url, seasons = table.len(), "season table extracted");
        Ok(table)
    }
}

/// Parse and clean the per-game table of a player page.
pub fn parse_per_game_page(html: &str) -> Result<PlayerSeasonTable> {
    let document = Html::parse_document(html);
    let tr = selector("tr")?;
    let th = selector("th")?;
    let td = selector("td")?;

    let mut rows = document.select(&tr);
    let header_row = rows
        .next()
        .ok_or_else(|| BbrError::shape("no table rows found"))?;
    let headers: Vec<String> = header_row.select(&th).map(cell_text).collect();
    if headers.is_empty() {
        return Err(BbrError::shape("first table row has no header cells"));
    }

    let raw: Vec<RawStatRow> = rows
        .map(|row| row.select(&td).map(cell_text).collect())
        .collect();
    let raw_count = raw.len();

    let kept = drop_years_off(raw);
    let columns = headers[1..].to_vec();
    let frame = fit_to_columns(kept, columns.len());
    let (frame, has_career) = trim_career(frame, &columns)?;
    debug!(
        raw = raw_count,
        kept = frame.len(),
        has_career,
        "per-game rows filtered"
    );

    if frame.is_empty() {
        return Ok(PlayerSeasonTable {
            columns,
            rows: Vec::new(),
        });
    }

    let labels = season_labels(&document, has_career)?;
    let rows = attach_seasons(frame, labels)?;

    Ok(PlayerSeasonTable {
        columns,
        rows: drop_repeats(rows),
    })
}

/// Drop rows with fewer cells than the first row.
///
/// Seasons a player sat out are rendered with fewer cells, which is the only
/// signal the page offers for them.
pub fn drop_years_off(rows: Vec<RawStatRow>) -> Vec<RawStatRow> {
    let Some(width) = rows.first().map(Vec::len) else {
        return rows;
    };
    rows.into_iter().filter(|row| row.len() >= width).collect()
}

fn fit_to_columns(rows: Vec<RawStatRow>, width: usize) -> Vec<RawStatRow> {
    let before = rows.len();
    let rows: Vec<RawStatRow> = rows.into_iter().filter(|row| row.len() == width).collect();
    if rows.len() < before {
        debug!(
            discarded = before - rows.len(),
            width, "rows not matching the header width discarded"
        );
    }
    rows
}

/// Keep rows up to and including the career row.
///
/// Returns whether a career row was found. Without one the rows come back
/// unchanged.
pub fn trim_career(
    mut rows: Vec<RawStatRow>,
    columns: &[String],
) -> Result<(Vec<RawStatRow>, bool)> {
    if rows.is_empty() {
        return Ok((rows, false));
    }
    let team = team_column_index(columns).ok_or_else(|| BbrError::MissingColumn {
        column: TEAM_COLUMNS.join("` or `"),
    })?;

    let career = rows
        .iter()
        .position(|row| row.get(team).is_some_and(|cell| is_career_team_cell(cell)));

    match career {
        Some(idx) => {
            rows.truncate(idx + 1);
            Ok((rows, true))
        }
        None => Ok((rows, false)),
    }
}

/// Season labels from the `th` cells of the first table body, with
/// `Career` appended when the table kept a career row.
pub fn season_labels(document: &Html, with_career: bool) -> Result<Vec<String>> {
    let tbody = selector("tbody")?;
    let th = selector("th")?;

    let body = document
        .select(&tbody)
        .next()
        .ok_or_else(|| BbrError::shape("stats page has no table body"))?;

    let mut labels: Vec<String> = body
        .select(&th)
        .map(cell_text)
        .filter(|text| is_season_label(text))
        .collect();
    if with_career {
        labels.push(CAREER_LABEL.to_string());
    }
    Ok(labels)
}

/// Pair labels with rows by position. The counts must match.
pub fn attach_seasons(rows: Vec<RawStatRow>, labels: Vec<String>) -> Result<Vec<SeasonRow>> {
    if labels.len() != rows.len() {
        return Err(BbrError::SeasonLabelMismatch {
            labels: labels.len(),
            rows: rows.len(),
        });
    }

    Ok(labels
        .into_iter()
        .zip(rows)
        .map(|(season, cells)| SeasonRow { season, cells })
        .collect())
}

/// Drop every row whose season equals the previous row's.
///
/// The combined row of a traded player's season comes first, so keeping the
/// first row of each run drops the per-team rows.
pub fn drop_repeats(mut rows: Vec<SeasonRow>) -> Vec<SeasonRow> {
    rows.dedup_by(|current, previous| current.season == previous.season);
    rows
}

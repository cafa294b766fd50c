//! basketball-reference.com scraper
//!
//! Collects the league's all-time player roster and cleans a player's
//! per-game statistics into one row per season plus a career row.
//!
//! ## Features
//!
//! - **Roster Collection**: Every player from the 25 surname index pages, with page URLs
//! - **Season Tables**: Per-game stats with partial seasons and sat-out years removed
//! - **Bounded Retries**: Request timeout plus retries for transient failures
//! - **Flexible Output**: Text, JSON or CSV, to stdout or a file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bbref_stats::{FetchSettings, PlayerLocator, RosterCollector, SeasonStatsExtractor, SiteClient};
//!
//! # async fn example() -> bbref_stats::Result<()> {
//! let client = SiteClient::new(FetchSettings::default())?;
//!
//! let roster = RosterCollector::new(client.clone()).collect_all_players().await?;
//! let locator: PlayerLocator = roster[0].url.parse()?;
//!
//! let table = SeasonStatsExtractor::new(client).extract_seasons(&locator).await?;
//! println!("{} seasons", table.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the scraper at a mirror or a local fixture server:
//! ```bash
//! export BBR_BASE_URL=http://localhost:8080
//! ```

pub mod bbref;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use bbref::{
    http::{FetchSettings, SiteClient},
    roster::RosterCollector,
    seasons::SeasonStatsExtractor,
    types::{PlayerRecord, PlayerSeasonTable, SeasonRow},
};
pub use cli::types::{IndexLetter, OutputFormat, PlayerLocator};
pub use error::{BbrError, Result};

pub const BASE_URL_ENV_VAR: &str = "BBR_BASE_URL";

//! CLI argument definitions and parsing.

pub mod types;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use types::{IndexLetter, OutputFormat, PlayerLocator};

use crate::{bbref::http::FetchSettings, commands::resolve_base_url};

/// Network options shared between commands
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Site origin (or set `BBR_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Retries for timeouts, connection errors, 429 and 5xx responses.
    #[clap(long, default_value_t = 2)]
    pub retries: u32,

    /// Back-off unit between retries, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,
}

impl FetchArgs {
    pub fn into_settings(self) -> FetchSettings {
        FetchSettings {
            base_url: resolve_base_url(self.base_url),
            timeout: Duration::from_secs(self.timeout_secs),
            retries: self.retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

/// Output options shared between commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format.
    #[clap(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(
    name = "bbref-stats",
    about = "Scrape player rosters and per-game season stats from basketball-reference.com"
)]
pub struct BbrCli {
    /// Log debug detail to stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every player with the URL of their stats page.
    ///
    /// Walks the roster index pages `/players/a/` .. `/players/z/` (there is
    /// no `x` page) and prints players in letter order.
    Players {
        /// Only these surname letters (repeatable): `-l a -l b`.
        #[clap(long = "letter", short = 'l')]
        letters: Option<Vec<IndexLetter>>,

        /// Index pages fetched at once. Output order does not change.
        #[clap(long, default_value_t = 1)]
        concurrency: usize,

        #[clap(flatten)]
        output: OutputArgs,

        #[clap(flatten)]
        fetch: FetchArgs,
    },

    /// Per-game stats of one player, one row per season plus a career row.
    Seasons {
        /// Player page URL, site path (`/players/j/jamesle01.html`) or id (`jamesle01`).
        locator: PlayerLocator,

        #[clap(flatten)]
        output: OutputArgs,

        #[clap(flatten)]
        fetch: FetchArgs,
    },
}

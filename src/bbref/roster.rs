//! Roster collection from the per-letter player index pages.
//!
//! Each index page at `/players/{letter}/` lists every player whose surname
//! starts with that letter. The collector fetches the pages in letter order,
//! keeps the anchors that point at player pages, and concatenates the
//! per-letter batches into one roster.

use futures_util::{stream, StreamExt, TryStreamExt};
use scraper::Html;
use tracing::{debug, info, trace};

use crate::{
    bbref::{
        http::SiteClient,
        markup::{cell_text, is_player_href, normalize_player_name, selector},
        types::PlayerRecord,
    },
    cli::types::IndexLetter,
    BbrError, Result,
};


/// Enumerates every player listed on the site's roster index pages.
#[derive(Debug, Clone)]
pub struct RosterCollector {
    client: SiteClient,
    letters: Vec<IndexLetter>,
    concurrency: usize,
}

impl RosterCollector {
    /// Collector over all 25 index letters, fetching one page at a time.
    pub fn new(client: SiteClient) -> Self {
        Self {
            client,
            letters: IndexLetter::all(),
            concurrency: 1,
        }
    }

    /// Restrict collection to `letters`. They are visited in alphabetical order.
    pub fn with_letters(mut self, mut letters: Vec<IndexLetter>) -> Self {
        letters.sort();
        letters.dedup();
        self.letters = letters;
        self
    }

    /// Fetch up to `n` index pages at once. Output order is unaffected.
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    pub fn letters(&self) -> &[IndexLetter] {
        &self.letters
    }

    /// URL of the index page for `letter`.
    pub fn index_url(&self, letter: IndexLetter) -> String {
        format!("{}/players/{}/", self.client.base_url(), letter)
    }

    /// Fetch every configured index page and concatenate the batches in
    /// letter order. Any failed page fails the whole call.
    pub async fn collect_all_players(&self) -> Result<Vec<PlayerRecord>> {
        let batches: Vec<Vec<PlayerRecord>> = stream::iter(self.letters.iter().copied())
            .map(|letter| self.collect_letter(letter))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let roster: Vec<PlayerRecord> = batches.into_iter().flatten().collect();
        info!(
            players = roster.len(),
            letters = self.letters.len(),
            "roster collected"
        );
        Ok(roster)
    }

    /// Fetch and parse one index page.
    pub async fn collect_letter(&self, letter: IndexLetter) -> Result<Vec<PlayerRecord>> {
        let url = self.index_url(letter);
        let html = self.client.fetch_page(&url).await?;
        let batch = parse_index_page(&html, self.client.base_url())?;
        debug!(%letter, players = batch.len(), "index page parsed");
        Ok(batch)
    }
}

/// Extract the players listed in the first `tbody` of an index page.
///
/// Hrefs are joined onto `origin`. Anchors that are not player links are
/// skipped. A page without any `tbody` is a shape error.
pub fn parse_index_page(html: &str, origin: &str) -> Result<Vec<PlayerRecord>> {
    let document = Html::parse_document(html);
    let tbody = selector("tbody")?;
    let anchor = selector("a")?;

    let body = document
        .select(&tbody)
        .next()
        .ok_or_else(|| BbrError::shape("index page has no table body"))?;

    let origin = origin.trim_end_matches('/');
    let mut players = Vec::new();

    for a in body.select(&anchor) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        if !is_player_href(href) {
            trace!(href, "skipping non-player link");
            continue;
        }
        players.push(PlayerRecord {
            name: normalize_player_name(&cell_text(a)),
            url: format!("{origin}{href}"),
        });
    }

    Ok(players)
}

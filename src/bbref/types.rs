use serde::{Deserialize, Serialize};

use crate::bbref::markup::{CAREER_LABEL, SEASON_COLUMN};

/// `td` texts of one scraped table row, in column order.
pub type RawStatRow = Vec<String>;

/// One player found on a roster index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name with spaces replaced by hyphens
    #[serde(rename = "Name")]
    pub name: String,
    /// Absolute URL of the player's page
    #[serde(rename = "URL")]
    pub url: String,
}

/// A stats row with its derived season label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRow {
    /// `YYYY-YY`, or `Career` for the aggregate row
    pub season: String,
    pub cells: Vec<String>,
}

impl SeasonRow {
    pub fn is_career(&self) -> bool {
        self.season == CAREER_LABEL
    }
}

/// A player's cleaned per-game table: one row per season, then `Career`.
///
/// `columns` names the entries of each row's `cells`; the season label is a
/// logical last column named `Season`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonTable {
    pub columns: Vec<String>,
    pub rows: Vec<SeasonRow>,
}

impl PlayerSeasonTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stat columns followed by `Season`, as exported.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(SEASON_COLUMN))
            .collect()
    }

    /// Season labels in row order.
    pub fn seasons(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.season.as_str()).collect()
    }

    /// Cell of `row` under `column`; `Season` reads the derived label.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let row = self.rows.get(row)?;
        if column == SEASON_COLUMN {
            return Some(&row.season);
        }
        let idx = self.columns.iter().position(|c| c == column)?;
        row.cells.get(idx).map(String::as_str)
    }

    /// The trailing aggregate row, when the page had one.
    pub fn career(&self) -> Option<&SeasonRow> {
        self.rows.last().filter(|r| r.is_career())
    }
}

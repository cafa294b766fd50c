//! Markup heuristics tied to basketball-reference.com's current HTML.
//!
//! Everything that depends on how the site renders its tables lives here, so
//! a markup change on the site touches this file only.

use scraper::{ElementRef, Selector};

use crate::{BbrError, Result};

/// Hrefs of player pages start with this; coach, team and franchise links do not.
pub const PLAYER_HREF_PREFIX: &str = "/players/";

/// Width of a `YYYY-YY` season label.
pub const SEASON_LABEL_LEN: usize = 7;

/// Label of the aggregate row closing a per-game table.
pub const CAREER_LABEL: &str = "Career";

/// Header of the derived season column.
pub const SEASON_COLUMN: &str = "Season";

/// Team column header, oldest spelling first.
pub const TEAM_COLUMNS: [&str; 2] = ["Tm", "Team"];

pub fn is_player_href(href: &str) -> bool {
    href.starts_with(PLAYER_HREF_PREFIX)
}

/// Season header cells are exactly `YYYY-YY`; team abbreviations, the
/// repeated `Season` header and footer labels all have other widths.
pub fn is_season_label(text: &str) -> bool {
    text.chars().count() == SEASON_LABEL_LEN
}

/// The career row is the first row with an empty team cell.
pub fn is_career_team_cell(team: &str) -> bool {
    team.is_empty()
}

/// Display name to identifier form: spaces become hyphens.
pub fn normalize_player_name(display: &str) -> String {
    display.replace(' ', "-")
}

/// Index of the team column among `columns`, if any spelling is present.
pub fn team_column_index(columns: &[String]) -> Option<usize> {
    columns
        .iter()
        .position(|c| TEAM_COLUMNS.contains(&c.as_str()))
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| BbrError::Selector {
        css: css.to_string(),
        message: e.to_string(),
    })
}

/// Concatenated text of an element, untrimmed.
pub(crate) fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_player_href() {
        assert!(is_player_href("/players/j/jamesle01.html"));
        assert!(!is_player_href("/coaches/jacksph01c.html"));
        assert!(!is_player_href("/teams/LAL/"));
        assert!(!is_player_href("https://www.basketball-reference.com/players/j/jamesle01.html"));
    }

    #[test]
    fn test_is_season_label() {
        assert!(is_season_label("2005-06"));
        assert!(is_season_label("1999-00"));
        assert!(!is_season_label("Career"));
        assert!(!is_season_label("Season"));
        assert!(!is_season_label("LAL"));
        assert!(!is_season_label("13 seasons"));
        assert!(!is_season_label(""));
    }

    #[test]
    fn test_normalize_player_name() {
        assert_eq!(normalize_player_name("LeBron James"), "LeBron-James");
        assert_eq!(normalize_player_name("Nick Van Exel"), "Nick-Van-Exel");
        assert_eq!(normalize_player_name("Nenê"), "Nenê");
    }

    #[test]
    fn test_team_column_index() {
        let old = vec!["Age".to_string(), "Tm".to_string(), "Lg".to_string()];
        let new = vec!["Age".to_string(), "Team".to_string(), "Lg".to_string()];
        let none = vec!["Age".to_string(), "Lg".to_string()];

        assert_eq!(team_column_index(&old), Some(1));
        assert_eq!(team_column_index(&new), Some(1));
        assert_eq!(team_column_index(&none), None);
    }

    #[test]
    fn test_is_career_team_cell() {
        assert!(is_career_team_cell(""));
        assert!(!is_career_team_cell("TOT"));
    }

    #[test]
    fn test_selector_rejects_garbage() {
        assert!(selector("tbody").is_ok());
        match selector("td[") {
            Err(BbrError::Selector { css, .. }) => assert_eq!(css, "td["),
            other => panic!("Expected Selector error, got {other:?}"),
        }
    }
}

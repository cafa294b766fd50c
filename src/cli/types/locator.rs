//! Player page locators.

use crate::error::{BbrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locator of a player's statistics page.
///
/// Accepts three spellings:
///
/// - an absolute URL, used as-is: `https://www.basketball-reference.com/players/j/jamesle01.html`
/// - a site-relative path: `/players/j/jamesle01.html`
/// - a bare player id: `jamesle01`, expanded to `/players/j/jamesle01.html`
///
/// # Examples
///
/// ```rust
/// use bbref_stats::PlayerLocator;
///
/// let locator: PlayerLocator = "jamesle01".parse().unwrap();
/// assert_eq!(
///     locator.resolve("https://www.basketball-reference.com"),
///     "https://www.basketball-reference.com/players/j/jamesle01.html"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerLocator {
    Absolute(String),
    Path(String),
}

impl PlayerLocator {
    /// Full URL of the page, joining site-relative paths onto `origin`.
    pub fn resolve(&self, origin: &str) -> String {
        match self {
            PlayerLocator::Absolute(url) => url.clone(),
            PlayerLocator::Path(path) => format!("{}{}", origin.trim_end_matches('/'), path),
        }
    }
}

fn is_player_id(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

impl fmt::Display for PlayerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerLocator::Absolute(url) => write!(f, "{}", url),
            PlayerLocator::Path(path) => write!(f, "{}", path),
        }
    }
}

impl FromStr for PlayerLocator {
    type Err = BbrError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("https://") || s.starts_with("http://") {
            Ok(PlayerLocator::Absolute(s.to_string()))
        } else if s.starts_with('/') {
            Ok(PlayerLocator::Path(s.to_string()))
        } else if is_player_id(s) {
            let initial = &s[..1];
            Ok(PlayerLocator::Path(format!("/players/{initial}/{s}.html")))
        } else {
            Err(BbrError::InvalidLocator {
                locator: s.to_string(),
            })
        }
    }
}

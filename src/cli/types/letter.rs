//! Surname letters of the roster index pages.

use crate::error::{BbrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a roster index letter.
///
/// The site publishes one index page per surname initial. There is no page
/// for `x`, so only 25 letters are valid.
///
/// # Examples
///
/// ```rust
/// use bbref_stats::IndexLetter;
///
/// let letter: IndexLetter = "J".parse().unwrap();
/// assert_eq!(letter.as_char(), 'j');
/// assert!("x".parse::<IndexLetter>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexLetter(char);

impl IndexLetter {
    /// Create an IndexLetter, rejecting anything outside `a`..`z` and `x` itself.
    pub fn new(c: char) -> Result<Self> {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() && c != 'x' {
            Ok(Self(c))
        } else {
            Err(BbrError::InvalidLetter {
                letter: c.to_string(),
            })
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// All 25 index letters in alphabetical order.
    pub fn all() -> Vec<IndexLetter> {
        ('a'..='z').filter(|c| *c != 'x').map(IndexLetter).collect()
    }
}

impl fmt::Display for IndexLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IndexLetter {
    type Err = BbrError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(BbrError::InvalidLetter {
                letter: s.to_string(),
            }),
        }
    }
}

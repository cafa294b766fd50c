//! basketball-reference.com access: HTTP client, markup heuristics, and the
//! two scrapers built on them.

pub mod http;
pub mod markup;
pub mod roster;
pub mod seasons;
pub mod types;

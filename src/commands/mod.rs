//! Command implementations for the bbref-stats CLI

pub mod players;
pub mod seasons;

use crate::{bbref::http::BBR_BASE_URL, BASE_URL_ENV_VAR};


/// Resolve the site origin: explicit option, then `BBR_BASE_URL`, then the public site.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| BBR_BASE_URL.to_string())
}

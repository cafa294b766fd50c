//! Core utilities shared by the command handlers
//!
//! - `output`: text, JSON and CSV writers for rosters and season tables

pub mod output;

pub use output::{open_output, write_roster, write_season_table};

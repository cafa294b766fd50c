//! Type-safe wrappers and enums for CLI arguments.

pub mod format;
pub mod letter;
pub mod locator;

pub use format::OutputFormat;
pub use letter::IndexLetter;
pub use locator::PlayerLocator;

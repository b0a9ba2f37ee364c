//! Shared helpers for paths and message formatting.

pub mod path;
pub mod plural;

pub use plural::plural_count;

//! Command-line interface module.

mod args;
pub mod generate;
pub mod lookup;
pub mod migrate;
pub mod validate;

pub use args::{Cli, Commands, LookupArgs, ValidateArgs};

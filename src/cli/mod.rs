//! Command-line interface module.

mod args;
pub mod index;
pub mod new;
pub mod validate;

pub use args::{Cli, Commands, IndexArgs, NewArgs, ValidateArgs};

//! Library exports for hoiku-cli: the clap command tree and its handlers.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

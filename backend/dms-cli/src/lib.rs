//! dms-cli library
//!
//! Argument parsing and command dispatch for the `dms` binary, exported so
//! tests can drive commands without a process boundary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::{CommandOutput, run};

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dms")]
#[command(about = "Physical document location hierarchy")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User recorded as the actor in the transaction log
    #[arg(long, global = true, default_value_t = 1)]
    pub actor: i64,

    /// Pretty-print JSON output; `tree` prints an indented outline
    #[arg(long, global = true)]
    pub pretty: bool,
}

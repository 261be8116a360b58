//! dms - physical document location hierarchy
//!
//! # Examples
//!
//! ```bash
//! # Create a room, then a cabinet inside it
//! dms create-unit --department-id 5 --type room --name Lab1
//! dms create-unit --department-id 5 --parent-id 1 --type cabinet --name A
//!
//! # Room and folder in one step
//! dms add-hierarchy --department-id 5 --room Lab2 --folder Contracts --capacity 25
//!
//! # Indented tree of the main department
//! dms tree --department-id 5 --pretty
//! ```

use dms_cli::{Cli, logger, run};
use dms_config::Config;
use dms_hierarchy::ExecutionContext;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<ExitCode, Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting dms v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = dms_db::open_pool(&database_path, config.database.max_connections).await?;

    let ctx = ExecutionContext::new(cli.actor, pool.clone(), config.storage_base_dir()?)
        .with_settings(config.hierarchy.clone());

    let output = run(cli.command, &ctx).await;
    pool.close().await;
    let output = output?;

    println!("{}", output.render(cli.pretty)?);

    if output.succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        error!("{} Command failed", ctx.log_prefix());
        Ok(ExitCode::FAILURE)
    }
}

//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `splash_report` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use splash_report::initialization::init_logger_with;
use splash_report::{run_report, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials usually live in .env; try the working directory first,
    // then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_report(config).await {
        Ok(summary) => {
            println!(
                "✅ Exported {} guest client{} in {:.1}s",
                summary.rows_written,
                if summary.rows_written == 1 { "" } else { "s" },
                summary.elapsed_seconds
            );
            match summary.report_path {
                Some(path) => println!("Report saved in {}", path.display()),
                None => println!("No report was written - see log for details"),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("splash_report error: {:#}", e);
            process::exit(1);
        }
    }
}

//! # regress CLI Entry Point
//!
//! This is the main executable for the `rgr` command-line tool.
//! It parses CLI arguments using clap and routes to the cycle driver.
//!
//! ## Commands
//!
//! - (default): run the full clean-configure-build-test cycle
//! - `clean`: remove the build directory
//! - `completion`: generate shell completion scripts

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use regress::config;
use regress::cycle;

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
    fn SetConsoleCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "rgr")]
#[command(about = "Regression cycles for CMake projects", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Run tests with verbose output sent to stdout
    #[arg(short, long)]
    verbose: bool,

    /// Path to the config file [default: regress.toml when present]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the build directory
    Clean,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Clean) => {
            let config = config::load_config(cli.config.as_deref())?;
            cycle::clean(&config)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            let config = config::load_config(cli.config.as_deref())?;
            cycle::run(&config, cli.verbose)
        }
    }
}

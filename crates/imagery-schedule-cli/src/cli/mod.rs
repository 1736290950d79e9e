//! Command-line interface: argument definitions and subcommands.

pub mod countries_cmd;
pub mod extract_cmd;
pub mod fetch_cmd;
pub mod output;

use crate::config::{
    Config, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_OUT_DIR, DEFAULT_TIMEOUT_SECS,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "imagery-schedule",
    version,
    about = "Download imagery collection schedules and export them as JSON"
)]
pub struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress progress output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Root URL of the schedule pages
    #[arg(long, global = true, env = "IMAGERY_SCHEDULE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for the per-country JSON files
    #[arg(long, global = true, env = "IMAGERY_SCHEDULE_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Accept-Language sent with every request
    #[arg(long, global = true, env = "IMAGERY_SCHEDULE_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "IMAGERY_SCHEDULE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available country identifiers
    Countries,
    /// Fetch schedules and write one JSON file per country
    Fetch {
        /// Countries to fetch; all countries when omitted
        countries: Vec<String>,
    },
    /// Extract a saved schedule page and print its records
    Extract {
        /// HTML file to read
        file: PathBuf,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            out_dir: self.out_dir.clone(),
            language: self.language.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..Config::default()
        }
    }
}

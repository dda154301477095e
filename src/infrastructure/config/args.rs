use super::site_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "assosite",
    version,
    about = "Listing preview CLI for the association website core",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the news listing.
    News {
        /// Category filter ("All" selects everything).
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// Print the agenda listing.
    Agenda {
        /// Category filter ("All" selects everything).
        #[arg(long, default_value = "All")]
        category: String,

        /// Month filter as YYYY-MM (empty selects everything).
        #[arg(long, default_value = "")]
        month: String,
    },

    /// Print the document listing.
    Documents {
        /// Category filter ("All" selects everything).
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// Print the home page summary.
    Home,
}

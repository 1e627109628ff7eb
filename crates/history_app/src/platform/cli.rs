use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "scan-history",
    about = "Browse, select, delete and export previously scanned codes",
    version
)]
pub struct Cli {
    /// RON configuration file; missing files fall back to defaults.
    #[arg(long, env = "SCAN_HISTORY_CONFIG", default_value = "scan_history.ron")]
    pub config: PathBuf,

    /// History file, overriding the configured one.
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Directory for CSV exports, overriding the configured one.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Program that receives the exported file path.
    #[arg(long)]
    pub share_command: Option<String>,

    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

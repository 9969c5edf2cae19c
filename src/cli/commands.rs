//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roam2org")]
#[command(about = "Convert a Roam Research markdown export into org-mode notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing your Roam Research export
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: PathBuf,

    /// Show what would be converted without writing or renaming files
    #[arg(long)]
    pub dry_run: bool,

    /// What to do when a note cannot be read, written or renamed (abort, continue)
    #[arg(long, value_name = "POLICY")]
    pub on_error: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log every skipped entry and per-note details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Analyze workout logs: personal records, volume, progression", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workout log file (defaults to the configured data file,
    /// then ./sample_workouts.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

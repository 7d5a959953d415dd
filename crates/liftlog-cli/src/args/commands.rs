use super::enums::{ExportFormat, ExportWhat};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the full performance report")]
    Report,

    #[command(about = "Show personal records (max weight per exercise)")]
    Prs {
        #[arg(long)]
        exercise: Option<String>,
    },

    #[command(about = "Show total volume lifted per exercise")]
    Volume,

    #[command(about = "Show per-session progression for one exercise")]
    Progression {
        exercise: String,

        #[arg(long, default_value = "30")]
        window_days: u32,
    },

    #[command(about = "Summarize the workout on a given date (YYYY-MM-DD)")]
    Session { date: String },

    #[command(about = "List workouts from the last N days")]
    Recent {
        #[arg(long, default_value = "7")]
        days: u32,
    },

    #[command(about = "Export the report or a progression series to a file")]
    Export {
        #[arg(long, default_value = "report")]
        what: ExportWhat,

        #[arg(long, help = "Exercise to export progression for")]
        exercise: Option<String>,

        #[arg(long, default_value = "30")]
        window_days: u32,

        #[arg(long, help = "Output path (stdout when omitted)")]
        output: Option<PathBuf>,

        #[arg(long, default_value = "json")]
        export_format: ExportFormat,
    },
}

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::{Context, Result};
use liftlog_engine::WorkoutLog;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_file = resolve_data_file(&cli, &config);

    log::debug!("using workout log {}", data_file.display());
    let sessions = liftlog_import::load_file(&data_file)
        .with_context(|| format!("failed to load workout log {}", data_file.display()))?;
    let log = WorkoutLog::from_sessions(sessions);
    let unit = config.weight_unit;

    let Some(command) = cli.command else {
        // Default entry point: full report plus progression per exercise.
        return handlers::overview::handle(&log, unit);
    };

    match command {
        Commands::Report => handlers::report::handle(&log, cli.format, unit),

        Commands::Prs { exercise } => {
            handlers::prs::handle(&log, exercise.as_deref(), cli.format, unit)
        }

        Commands::Volume => handlers::volume::handle(&log, cli.format),

        Commands::Progression {
            exercise,
            window_days,
        } => handlers::progression::handle(&log, &exercise, window_days, cli.format, unit),

        Commands::Session { date } => handlers::session::handle(&log, &date, cli.format, unit),

        Commands::Recent { days } => handlers::recent::handle(&log, days, cli.format),

        Commands::Export {
            what,
            exercise,
            window_days,
            output,
            export_format,
        } => handlers::export::handle(
            &log,
            what,
            exercise.as_deref(),
            window_days,
            output,
            export_format,
        ),
    }
}

/// Data file priority: --file flag, configured data_file, bundled sample.
fn resolve_data_file(cli: &Cli, config: &Config) -> PathBuf {
    cli.file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from("sample_workouts.json"))
}

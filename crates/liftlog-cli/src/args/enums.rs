use clap::ValueEnum;

/// Console output format for query commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// Machine-readable JSON
    Json,
}

/// What the export command writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportWhat {
    /// The composite report
    Report,
    /// A per-session progression series (requires --exercise)
    Progression,
}

/// File format for the export command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

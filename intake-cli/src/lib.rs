//! Library entry for intake-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// Output format shared by commands that print resolved serials
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One serial per line
    #[default]
    Lines,
    /// `{"ok": true, "serials": [...]}` result object
    Json,
}

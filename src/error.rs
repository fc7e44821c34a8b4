//! Failure kinds of a scrape run.
//!
//! `Fetch` and `EmptyResult` are the "nothing to report" outcomes; the rest
//! abort the run as unexpected.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Transport failure, non-2xx status, or unreadable input file.
    #[error("fetching {target} failed: {source}")]
    Fetch {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Page retrieved but the plans table is missing or has no rows.
    #[error("no plans found at {0}")]
    EmptyResult(String),

    /// A row lacks the header cell or every data cell.
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: &'static str },

    #[error("csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("log {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScrapeError::Fetch { .. } | ScrapeError::EmptyResult(_) => 1,
            ScrapeError::MalformedRow { .. }
            | ScrapeError::Csv { .. }
            | ScrapeError::Log { .. } => 2,
        }
    }
}

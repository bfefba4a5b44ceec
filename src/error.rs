// src/error.rs
use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can abort a pipeline run or a snapshot/export operation.
///
/// Fetch, Schema, Parse and Join are fatal for a run: the previous snapshot
/// stays on disk untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unexpected table layout on {page}: {detail}")]
    Schema { page: String, detail: String },

    #[error("cannot parse {field} value {value:?} on {page}")]
    Parse {
        field: &'static str,
        value: String,
        page: String,
    },

    #[error(transparent)]
    Join(#[from] JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Score rows and lane assignments failed to line up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    #[error("no lane assignment for {date}")]
    MissingLanes { date: NaiveDate },

    #[error("conflicting lane assignments for {date}: {first} and {second}")]
    ConflictingLanes {
        date: NaiveDate,
        first: u32,
        second: u32,
    },
}

impl Error {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Error::Fetch { url: s!(url), reason: reason.to_string() }
    }

    pub fn schema(page: &str, detail: impl Into<String>) -> Self {
        Error::Schema { page: s!(page), detail: detail.into() }
    }

    pub fn parse(field: &'static str, value: &str, page: &str) -> Self {
        Error::Parse { field, value: s!(value), page: s!(page) }
    }

    /// True for the kinds that mean "the run failed", as opposed to local I/O trouble.
    pub fn is_run_failure(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. } | Error::Schema { .. } | Error::Parse { .. } | Error::Join(_)
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

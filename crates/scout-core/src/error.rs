use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Job Scout.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// The listings request exceeded its deadline.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// A connection to the listings server could not be established.
    #[error("Could not connect to the listings server: {0}")]
    Connection(String),

    /// Any other transport-level failure while fetching listings.
    #[error("Failed to fetch listings: {0}")]
    Transport(String),

    /// The listings response body could not be parsed.
    #[error("Failed to parse listings response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The API responded successfully but returned zero listings.
    ///
    /// This is a no-data signal rather than a fault; callers print an
    /// informational message and leave the working table untouched.
    #[error("The server returned no job listings")]
    NoData,

    /// A user-supplied path does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A file's extension is not one of the loadable formats.
    #[error("Unsupported file format: {0} (only .csv, .xlsx and .xls can be loaded)")]
    UnsupportedFormat(PathBuf),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be created or written to disk.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's contents could not be parsed as a job table.
    #[error("Failed to load {path}: {message}")]
    FileParse { path: PathBuf, message: String },

    /// Charting was requested on a table without a category column.
    #[error("No category information available to chart")]
    MissingCategoryColumn,

    /// The chart image could not be rendered or saved.
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// An error originating from the terminal layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the scout crates.
pub type Result<T> = std::result::Result<T, ScoutError>;

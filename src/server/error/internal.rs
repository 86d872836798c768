use thiserror::Error;

/// Internal failures that indicate a broken environment or a bug.
///
/// All variants result in a 500 Internal Server Error with a generic message returned to the
/// client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Writing a CSV record failed.
    #[error("Failed to write CSV export: {0}")]
    CsvExport(#[from] csv::Error),

    /// Flushing the CSV writer into its buffer failed.
    #[error("Failed to finish CSV export: {0}")]
    CsvBuffer(String),

    /// Reading or writing an uploaded file failed.
    #[error("File storage failed for '{path}': {source}")]
    FileStorage {
        /// Path of the file on disk
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an audit snapshot failed.
    #[error("Failed to serialize audit snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column holds data that does not match the expected shape.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode stored JSON column '{column}': {source}")]
    StoredJson {
        /// Name of the column that failed to decode
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A stored slot time is not in `HH:MM AM|PM` format.
    #[error("Stored slot time '{0}' is not a valid 12-hour time")]
    StoredSlotTime(String),
}

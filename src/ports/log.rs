//! Prediction log port: append-only sink for record+label rows.

use crate::domain::InputRecord;

/// Append-only tabular sink for prediction log entries.
///
/// An entry is the record's values in schema order plus a trailing label
/// column. Appends never rewrite existing rows. Implementations must
/// serialize concurrent appends so partial rows cannot interleave.
pub trait PredictionLog: Send + Sync {
    /// Error type for append failures (disk full, permission denied, header
    /// mismatch). By design an append failure must not invalidate the
    /// already-computed prediction.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append one record+label row, creating the log with a header row
    /// derived from the record's field names if it does not exist yet.
    ///
    /// # Errors
    /// Returns error if the append fails.
    fn append(&self, record: &InputRecord, label: &str) -> Result<(), Self::Error>;
}

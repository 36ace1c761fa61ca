//! Errors raised while loading a measurement document.

/// Errors that can occur when deserializing a [`MeasurementSet`](crate::MeasurementSet).
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// An I/O error occurred while reading the measurement document.
    #[error("failed to read measurements: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the measurement layout.
    #[error("failed to parse measurements: {0}")]
    Parse(#[from] serde_json::Error),
}

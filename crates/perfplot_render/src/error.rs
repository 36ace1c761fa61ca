//! Errors raised while rendering chart literals.

use perfplot_chart::ChartError;

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a page's chart data.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The measurements could not be shaped into datasets.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// The datasets could not be serialized.
    #[error("failed to serialize chart data: {0}")]
    Serialize(#[from] serde_json::Error),
}

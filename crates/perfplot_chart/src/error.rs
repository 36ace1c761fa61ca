//! Errors raised while building chart datasets.

use crate::path::MetricPath;

/// Result type for chart building.
pub type ChartResult<T> = Result<T, ChartError>;

/// A measurement inconsistency found while building a device's datasets.
///
/// Building stops at the first error; the caller decides whether to skip
/// the device or abort the render.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// A toolchain entry exists but lacks the requested metric or sub-key.
    #[error("device '{device}': toolchain '{toolchain}' has no '{path}' measurement")]
    MissingMetric {
        /// Device being built.
        device: String,
        /// Toolchain whose entry lacks the metric.
        toolchain: String,
        /// The requested metric path.
        path: MetricPath,
    },

    /// A clock or resource declared by the device is recorded by no toolchain.
    #[error("device '{device}': declared dimension '{path}' is not recorded by any toolchain")]
    MissingDimension {
        /// Device being built.
        device: String,
        /// The declared dimension, as a metric path.
        path: MetricPath,
    },

    /// A series has a different number of samples than the device has dates.
    #[error(
        "device '{device}': toolchain '{toolchain}' series '{path}' has {actual} samples, expected {expected}"
    )]
    LengthMismatch {
        /// Device being built.
        device: String,
        /// Toolchain owning the series.
        toolchain: String,
        /// The metric path of the series.
        path: MetricPath,
        /// Number of dates declared by the device.
        expected: usize,
        /// Number of samples in the series.
        actual: usize,
    },

    /// A per-project build named a project absent from the measurement set.
    #[error("unknown project '{0}'")]
    UnknownProject(String),
}

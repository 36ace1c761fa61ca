//! Shared data model for FPGA toolchain benchmark charts.
//!
//! This crate provides the measurement input types (projects, devices,
//! toolchains, per-metric series) as produced by the benchmark aggregation
//! step, and the chart output types consumed by the browser charting
//! library. All mappings preserve insertion order, since output series order
//! follows the order of the source document.

#![warn(missing_docs)]

pub mod chart;
pub mod error;
pub mod ident;
pub mod measurement;

pub use chart::{
    ChartSeries, DeviceChart, MetricBundle, MetricValue, ProjectCharts, SetCharts,
};
pub use error::ModelError;
pub use ident::{is_identifier, sanitize_identifier};
pub use measurement::{
    DeviceData, MeasurementSet, MetricEntry, ProjectData, Series, ToolchainMetrics,
};

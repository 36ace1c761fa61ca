//! Reshapes benchmark measurements into per-device chart datasets.
//!
//! [`SeriesBuilder`] walks a device's `graph_data` and projects each
//! toolchain's series for a requested [`MetricPath`] into a
//! [`ChartSeries`](perfplot_model::ChartSeries). A [`Shape`] names which
//! metrics are emitted and how series are labeled; the three shapes back the
//! summary page, the full comparison page and the per-project pages.

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod label;
pub mod path;
pub mod shape;

pub use builder::SeriesBuilder;
pub use error::{ChartError, ChartResult};
pub use label::LabelStyle;
pub use path::{Dimension, MetricCategory, MetricPath};
pub use shape::{MetricSelector, MetricSpec, Shape};

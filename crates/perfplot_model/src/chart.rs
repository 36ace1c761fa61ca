//! Chart output types in the shape the browser charting library consumes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::measurement::Series;

/// A single chart dataset: `{data, label, borderColor, fill: false}`.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ChartSeries {
    /// Plotted samples, `null` where a run produced no value.
    pub data: Vec<Option<f64>>,
    /// Legend label for the line.
    pub label: String,
    /// Line color.
    #[serde(rename = "borderColor")]
    pub border_color: String,
    /// Area fill under the line; always `false` for benchmark trends.
    pub fill: bool,
}

impl ChartSeries {
    /// Projects a measurement series into a chart dataset with the given label.
    pub fn from_series(series: &Series, label: impl Into<String>) -> Self {
        Self {
            data: series.data.clone(),
            label: label.into(),
            border_color: series.color.clone(),
            fill: false,
        }
    }
}

/// Output for one metric: a flat dataset list, or one list per sub-dimension.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// One dataset per toolchain.
    Series(Vec<ChartSeries>),
    /// Sub-dimension name (clock, resource, runtime stage) → one dataset per toolchain.
    Keyed(IndexMap<String, Vec<ChartSeries>>),
}

impl MetricValue {
    /// Returns the flat dataset list, if this is a flat metric.
    pub fn as_series(&self) -> Option<&[ChartSeries]> {
        match self {
            MetricValue::Series(list) => Some(list),
            MetricValue::Keyed(_) => None,
        }
    }

    /// Returns the keyed dataset lists, if this is a keyed metric.
    pub fn as_keyed(&self) -> Option<&IndexMap<String, Vec<ChartSeries>>> {
        match self {
            MetricValue::Series(_) => None,
            MetricValue::Keyed(map) => Some(map),
        }
    }
}

/// Metric name → chart output, in emission order.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct MetricBundle(IndexMap<String, MetricValue>);

impl MetricBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a metric, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: MetricValue) {
        self.0.insert(name.into(), value);
    }

    /// Looks up a metric by output name.
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.0.get(name)
    }

    /// Iterates metric names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of metrics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bundle holds no metrics.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything emitted for one device: its date axis followed by its metrics.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct DeviceChart {
    /// X-axis labels.
    pub dates: Vec<String>,
    /// Metric datasets, flattened next to `dates` in the output object.
    #[serde(flatten)]
    pub metrics: MetricBundle,
}

/// Device name → chart output for a single project.
pub type ProjectCharts = IndexMap<String, DeviceChart>;

/// Project name → device charts for a whole measurement set.
pub type SetCharts = IndexMap<String, ProjectCharts>;

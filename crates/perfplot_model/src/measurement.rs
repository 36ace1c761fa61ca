//! Benchmark measurement input: project → device → toolchain → metric → series.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::ModelError;

/// One plotted line: a value per benchmark date plus its display color.
///
/// A `None` sample marks a run that produced no value for this metric and is
/// rendered as `null` so the chart leaves a gap.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Series {
    /// Samples in date order, one per entry of the owning device's `dates`.
    pub data: Vec<Option<f64>>,
    /// Display color assigned to the toolchain by the upstream producer.
    pub color: String,
}

impl Series {
    /// Creates a series from fully populated samples.
    pub fn new(data: impl IntoIterator<Item = f64>, color: impl Into<String>) -> Self {
        Self {
            data: data.into_iter().map(Some).collect(),
            color: color.into(),
        }
    }
}

/// A metric category's value for a single toolchain.
///
/// Scalar-per-run metrics (wirelength, memory) are a single [`Series`];
/// multi-dimensional metrics (runtime stages, clocks, resources) map a
/// sub-dimension name to a [`Series`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricEntry {
    /// A single series for the whole category.
    Flat(Series),
    /// One series per sub-dimension key.
    Keyed(IndexMap<String, Series>),
}

/// All metric categories recorded for one toolchain on one device.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolchainMetrics(IndexMap<String, MetricEntry>);

impl ToolchainMetrics {
    /// Creates an empty metric table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `category`, returning `self` for chaining.
    pub fn with(mut self, category: impl Into<String>, entry: MetricEntry) -> Self {
        self.0.insert(category.into(), entry);
        self
    }

    /// Returns the raw entry stored under `category`.
    pub fn get(&self, category: &str) -> Option<&MetricEntry> {
        self.0.get(category)
    }

    /// Iterates category names in stored order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Measurements for one benchmarked device.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DeviceData {
    /// Benchmark date labels, oldest first.
    #[serde(default)]
    pub dates: Vec<String>,
    /// Clock-domain names reported for this device.
    #[serde(default)]
    pub clocks: Vec<String>,
    /// Resource type names (e.g. `LUT`, `DFF`) reported for this device.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Runtime stage names (e.g. `total`, `synthesis`, `routing`).
    #[serde(default)]
    pub runtime: Vec<String>,
    /// Per-toolchain metrics, in the order toolchains should be plotted.
    #[serde(default)]
    pub graph_data: IndexMap<String, ToolchainMetrics>,
}

impl DeviceData {
    /// Returns `true` if nothing can be plotted for this device.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.graph_data.is_empty()
    }
}

/// Devices benchmarked within one project.
pub type ProjectData = IndexMap<String, DeviceData>;

/// The root measurement document: project name → device name → [`DeviceData`].
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementSet(IndexMap<String, ProjectData>);

impl MeasurementSet {
    /// Creates an empty measurement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a measurement document from JSON text, keeping key order.
    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a measurement document from a JSON byte stream, keeping key order.
    ///
    /// Read failures surface as [`ModelError::Io`], malformed content as
    /// [`ModelError::Parse`].
    pub fn from_reader(mut reader: impl Read) -> Result<Self, ModelError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content)
    }

    /// Inserts (or replaces) a project's device table.
    pub fn insert_project(&mut self, name: impl Into<String>, devices: ProjectData) {
        self.0.insert(name.into(), devices);
    }

    /// Looks up a project by name.
    pub fn project(&self, name: &str) -> Option<&ProjectData> {
        self.0.get(name)
    }

    /// Iterates projects in document order.
    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectData)> {
        self.0.iter().map(|(name, devices)| (name.as_str(), devices))
    }

    /// Returns the number of projects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no projects.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

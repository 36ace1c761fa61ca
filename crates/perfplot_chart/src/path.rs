//! Typed metric paths and their lookup in a toolchain's measurements.

use perfplot_model::{DeviceData, MetricEntry, Series, ToolchainMetrics};
use std::fmt;

/// A metric category recorded per toolchain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MetricCategory {
    /// Wall-clock runtime, keyed by stage (`total`, `synthesis`, ...).
    Runtime,
    /// Total routed wirelength.
    Wirelength,
    /// Peak memory use of the flow.
    Memory,
    /// Achieved frequency, keyed by clock domain.
    Freq,
    /// Resource utilization, keyed by resource type.
    Resources,
    /// Post-synthesis resource utilization, keyed by resource type.
    SynthResources,
    /// Post-implementation resource utilization, keyed by resource type.
    ImplResources,
}

impl MetricCategory {
    /// Keys under which the category may be stored, in lookup order.
    pub fn input_keys(self) -> &'static [&'static str] {
        match self {
            MetricCategory::Runtime => &["runtime"],
            MetricCategory::Wirelength => &["wirelength"],
            MetricCategory::Memory => &["maximum_memory_use", "memory"],
            MetricCategory::Freq => &["freq"],
            MetricCategory::Resources => &["resources"],
            MetricCategory::SynthResources => &["synth_resources"],
            MetricCategory::ImplResources => &["impl_resources"],
        }
    }

    /// Name used in paths and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricCategory::Runtime => "runtime",
            MetricCategory::Wirelength => "wirelength",
            MetricCategory::Memory => "memory",
            MetricCategory::Freq => "freq",
            MetricCategory::Resources => "resources",
            MetricCategory::SynthResources => "synth_resources",
            MetricCategory::ImplResources => "impl_resources",
        }
    }

    /// Returns `true` for categories whose sub-keys are resource names.
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            MetricCategory::Resources
                | MetricCategory::SynthResources
                | MetricCategory::ImplResources
        )
    }

    /// Normalizes a sub-key the way it is stored and emitted.
    ///
    /// Resource names are lower-cased; runtime stage names use `_` for spaces;
    /// clock names are kept verbatim.
    pub fn normalize_key(self, key: &str) -> String {
        if self.is_resource() {
            key.to_lowercase()
        } else if self == MetricCategory::Runtime {
            key.replace(' ', "_")
        } else {
            key.to_string()
        }
    }

    fn entry(self, metrics: &ToolchainMetrics) -> Option<&MetricEntry> {
        self.input_keys().iter().find_map(|key| metrics.get(key))
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A list of sub-dimension names declared per device.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dimension {
    /// `DeviceData::clocks`.
    Clocks,
    /// `DeviceData::resources`.
    Resources,
    /// `DeviceData::runtime`.
    RuntimeStages,
}

impl Dimension {
    /// Returns the device's declared names for this dimension, in stored order.
    pub fn declared(self, device: &DeviceData) -> &[String] {
        match self {
            Dimension::Clocks => &device.clocks,
            Dimension::Resources => &device.resources,
            Dimension::RuntimeStages => &device.runtime,
        }
    }
}

/// A metric category plus an optional, already normalized sub-key.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MetricPath {
    /// The category.
    pub category: MetricCategory,
    /// Sub-dimension key for multi-dimensional categories.
    pub sub_key: Option<String>,
}

impl MetricPath {
    /// A path to a scalar-per-run category.
    pub fn flat(category: MetricCategory) -> Self {
        Self {
            category,
            sub_key: None,
        }
    }

    /// A path to one sub-dimension of a category. The key is normalized.
    pub fn keyed(category: MetricCategory, key: &str) -> Self {
        Self {
            category,
            sub_key: Some(category.normalize_key(key)),
        }
    }

    /// Finds the series this path addresses in one toolchain's measurements.
    ///
    /// Stored sub-keys are compared in normalized form: resource keys match
    /// case-insensitively (a declared `LUT` finds a stored `Lut`) and a stored
    /// runtime stage `link design` matches `link_design`.
    pub fn resolve<'a>(&self, metrics: &'a ToolchainMetrics) -> Option<&'a Series> {
        match (self.category.entry(metrics)?, &self.sub_key) {
            (MetricEntry::Flat(series), None) => Some(series),
            (MetricEntry::Keyed(map), Some(key)) => {
                if let Some(series) = map.get(key.as_str()) {
                    return Some(series);
                }
                map.iter()
                    .find(|(stored, _)| self.category.normalize_key(stored) == *key)
                    .map(|(_, series)| series)
            }
            _ => None,
        }
    }
}

impl fmt::Display for MetricPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_key {
            Some(key) => write!(f, "{}.{key}", self.category),
            None => write!(f, "{}", self.category),
        }
    }
}

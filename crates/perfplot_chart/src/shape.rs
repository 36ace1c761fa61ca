//! Output shapes: which metrics a page needs and how its series are labeled.

use crate::label::LabelStyle;
use crate::path::{Dimension, MetricCategory, MetricPath};

/// Selects the series a metric is built from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MetricSelector {
    /// One series per toolchain, optionally taken from a fixed sub-key
    /// (e.g. the `total` runtime stage).
    Flat {
        /// The category to read.
        category: MetricCategory,
        /// Fixed sub-key inside a keyed category.
        sub_key: Option<&'static str>,
    },
    /// One series list per name declared by the device for `dimension`.
    Keyed {
        /// The category to read.
        category: MetricCategory,
        /// The device list that supplies the sub-keys.
        dimension: Dimension,
    },
}

impl MetricSelector {
    /// The metric path read from each toolchain for a flat selector.
    pub fn flat_path(&self) -> Option<MetricPath> {
        match *self {
            MetricSelector::Flat { category, sub_key } => Some(match sub_key {
                Some(key) => MetricPath::keyed(category, key),
                None => MetricPath::flat(category),
            }),
            MetricSelector::Keyed { .. } => None,
        }
    }
}

/// One metric emitted by a shape.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MetricSpec {
    /// Key in the emitted device object.
    pub name: &'static str,
    /// Where the series come from.
    pub selector: MetricSelector,
}

const fn flat(
    name: &'static str,
    category: MetricCategory,
    sub_key: Option<&'static str>,
) -> MetricSpec {
    MetricSpec {
        name,
        selector: MetricSelector::Flat { category, sub_key },
    }
}

const fn keyed(name: &'static str, category: MetricCategory, dimension: Dimension) -> MetricSpec {
    MetricSpec {
        name,
        selector: MetricSelector::Keyed {
            category,
            dimension,
        },
    }
}

const SUMMARY: &[MetricSpec] = &[flat("runtime", MetricCategory::Runtime, Some("total"))];

const FULL: &[MetricSpec] = &[
    flat("runtime", MetricCategory::Runtime, Some("total")),
    flat("wirelength", MetricCategory::Wirelength, None),
    flat("memory", MetricCategory::Memory, None),
    keyed("freq", MetricCategory::Freq, Dimension::Clocks),
    keyed("resources", MetricCategory::Resources, Dimension::Resources),
];

const PER_PROJECT: &[MetricSpec] = &[
    keyed("runtime", MetricCategory::Runtime, Dimension::RuntimeStages),
    flat("wirelength", MetricCategory::Wirelength, None),
    flat("memory", MetricCategory::Memory, None),
    keyed("freq", MetricCategory::Freq, Dimension::Clocks),
    keyed("synth_resources", MetricCategory::SynthResources, Dimension::Resources),
    keyed("impl_resources", MetricCategory::ImplResources, Dimension::Resources),
];

/// The three supported renderings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// Total runtime only, every device on a shared chart.
    Summary,
    /// Total runtime, wirelength, memory, per-clock frequency and resources.
    Full,
    /// Every runtime stage plus synthesis and implementation resources for one project.
    PerProject,
}

impl Shape {
    /// Metrics emitted for each device, in output order.
    pub fn metrics(self) -> &'static [MetricSpec] {
        match self {
            Shape::Summary => SUMMARY,
            Shape::Full => FULL,
            Shape::PerProject => PER_PROJECT,
        }
    }

    /// Label format used for every dataset of this shape.
    pub fn label_style(self) -> LabelStyle {
        match self {
            Shape::Summary => LabelStyle::DeviceToolchain,
            Shape::Full | Shape::PerProject => LabelStyle::Toolchain,
        }
    }
}

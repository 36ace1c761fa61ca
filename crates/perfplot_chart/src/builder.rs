//! The series builder: projects device measurements into chart datasets.

use indexmap::IndexMap;
use perfplot_model::{
    ChartSeries, DeviceChart, DeviceData, MeasurementSet, MetricBundle, MetricValue, ProjectCharts,
    ProjectData, SetCharts,
};
use tracing::{debug, debug_span, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::label::LabelStyle;
use crate::path::MetricPath;
use crate::shape::{MetricSelector, Shape};

/// Builds chart datasets from measurements.
///
/// The builder holds no state besides its options, so one instance can be
/// shared across devices and projects. Every call allocates fresh output and
/// only reads the input slice it is given.
#[derive(Debug, Clone, Copy)]
pub struct SeriesBuilder {
    validate_lengths: bool,
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesBuilder {
    /// Creates a builder that rejects series whose length differs from the
    /// device's date count.
    pub fn new() -> Self {
        Self {
            validate_lengths: true,
        }
    }

    /// Enables or disables the series length check.
    pub fn with_length_validation(mut self, enabled: bool) -> Self {
        self.validate_lengths = enabled;
        self
    }

    /// Builds one metric for one device.
    ///
    /// A flat selector yields one dataset per toolchain, in `graph_data`
    /// order. A keyed selector yields, for each name the device declares for
    /// the selector's dimension, such a dataset list keyed by the normalized
    /// name. A device without dates or toolchains yields empty lists.
    pub fn build_metric_bundle(
        &self,
        device: &str,
        data: &DeviceData,
        selector: &MetricSelector,
        labels: LabelStyle,
    ) -> ChartResult<MetricValue> {
        match *selector {
            MetricSelector::Flat { category, sub_key } => {
                let path = match sub_key {
                    Some(key) => MetricPath::keyed(category, key),
                    None => MetricPath::flat(category),
                };
                Ok(MetricValue::Series(
                    self.build_series(device, data, &path, labels)?,
                ))
            }
            MetricSelector::Keyed {
                category,
                dimension,
            } => {
                let mut keyed = IndexMap::new();
                for name in dimension.declared(data) {
                    let path = MetricPath::keyed(category, name);
                    let recorded = data.graph_data.values().any(|m| path.resolve(m).is_some());
                    if !data.is_empty() && !recorded {
                        return Err(ChartError::MissingDimension {
                            device: device.to_string(),
                            path,
                        });
                    }
                    let series = self.build_series(device, data, &path, labels)?;
                    keyed.insert(category.normalize_key(name), series);
                }
                Ok(MetricValue::Keyed(keyed))
            }
        }
    }

    /// Builds every metric `shape` emits for one device.
    pub fn build_device(
        &self,
        device: &str,
        data: &DeviceData,
        shape: Shape,
    ) -> ChartResult<DeviceChart> {
        if data.is_empty() {
            warn!(device, "no dates or toolchains recorded, emitting empty series");
        }

        let labels = shape.label_style();
        let mut metrics = MetricBundle::new();
        for spec in shape.metrics() {
            let value = self.build_metric_bundle(device, data, &spec.selector, labels)?;
            metrics.insert(spec.name, value);
        }

        debug!(device, toolchains = data.graph_data.len(), ?shape, "built device charts");
        Ok(DeviceChart {
            dates: data.dates.clone(),
            metrics,
        })
    }

    /// Builds every device of one project.
    pub fn build_project(&self, devices: &ProjectData, shape: Shape) -> ChartResult<ProjectCharts> {
        let mut out = ProjectCharts::with_capacity(devices.len());
        for (device, data) in devices {
            out.insert(device.clone(), self.build_device(device, data, shape)?);
        }
        Ok(out)
    }

    /// Builds every project in the set.
    pub fn build_set(&self, set: &MeasurementSet, shape: Shape) -> ChartResult<SetCharts> {
        let mut out = SetCharts::new();
        for (project, devices) in set.projects() {
            let _span = debug_span!("project", project).entered();
            out.insert(project.to_string(), self.build_project(devices, shape)?);
        }
        Ok(out)
    }

    /// Builds the per-project page data for a single named project.
    pub fn build_named_project(
        &self,
        set: &MeasurementSet,
        project: &str,
    ) -> ChartResult<ProjectCharts> {
        let devices = set
            .project(project)
            .ok_or_else(|| ChartError::UnknownProject(project.to_string()))?;
        let _span = debug_span!("project", project).entered();
        self.build_project(devices, Shape::PerProject)
    }

    fn build_series(
        &self,
        device: &str,
        data: &DeviceData,
        path: &MetricPath,
        labels: LabelStyle,
    ) -> ChartResult<Vec<ChartSeries>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        data.graph_data
            .iter()
            .map(|(toolchain, metrics)| {
                let series = path.resolve(metrics).ok_or_else(|| ChartError::MissingMetric {
                    device: device.to_string(),
                    toolchain: toolchain.clone(),
                    path: path.clone(),
                })?;
                if self.validate_lengths && series.data.len() != data.dates.len() {
                    return Err(ChartError::LengthMismatch {
                        device: device.to_string(),
                        toolchain: toolchain.clone(),
                        path: path.clone(),
                        expected: data.dates.len(),
                        actual: series.data.len(),
                    });
                }
                trace!(device, toolchain = %toolchain, %path, "series resolved");
                Ok(ChartSeries::from_series(series, labels.format(device, toolchain)))
            })
            .collect()
    }
}

//! Per-shape entry points producing the chart data scripts.

use perfplot_chart::{SeriesBuilder, Shape};
use perfplot_config::RenderConfig;
use perfplot_model::{sanitize_identifier, MeasurementSet};
use tracing::info;

use crate::error::RenderResult;
use crate::literal::LiteralRenderer;

/// Which page's data to render.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderRequest<'a> {
    /// Total runtime of every project and device, bound to the configured binding.
    Summary,
    /// Every metric of every project and device, bound to the configured binding.
    Full,
    /// Every metric of one project, bound to the project's own binding.
    PerProject {
        /// Project to render.
        project: &'a str,
    },
}

impl RenderRequest<'_> {
    /// The shape this request builds.
    pub fn shape(&self) -> Shape {
        match self {
            RenderRequest::Summary => Shape::Summary,
            RenderRequest::Full => Shape::Full,
            RenderRequest::PerProject { .. } => Shape::PerProject,
        }
    }
}

/// Builds and serializes chart data for the benchmark pages.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    binding: String,
    project_prefix: String,
    builder: SeriesBuilder,
    literal: LiteralRenderer,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl PageRenderer {
    /// Creates a renderer from the `[render]` configuration section.
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            binding: config.binding.clone(),
            project_prefix: config.project_prefix.clone(),
            builder: SeriesBuilder::new().with_length_validation(config.validate_lengths),
            literal: LiteralRenderer::new(config.pretty),
        }
    }

    /// Renders the data script for `request`.
    pub fn render(&self, set: &MeasurementSet, request: RenderRequest<'_>) -> RenderResult<String> {
        match request {
            RenderRequest::Summary => self.render_summary(set),
            RenderRequest::Full => self.render_full(set),
            RenderRequest::PerProject { project } => self.render_project(set, project),
        }
    }

    /// Renders `var <binding> = {project: {device: {dates, runtime}}};`.
    pub fn render_summary(&self, set: &MeasurementSet) -> RenderResult<String> {
        let charts = self.builder.build_set(set, Shape::Summary)?;
        info!(projects = charts.len(), binding = %self.binding, "rendered summary data");
        self.literal.render_binding(&self.binding, &charts)
    }

    /// Renders every metric of every project under the configured binding.
    pub fn render_full(&self, set: &MeasurementSet) -> RenderResult<String> {
        let charts = self.builder.build_set(set, Shape::Full)?;
        info!(projects = charts.len(), binding = %self.binding, "rendered full data");
        self.literal.render_binding(&self.binding, &charts)
    }

    /// Renders `var <prefix><project> = {device: {...}};` for one project.
    pub fn render_project(&self, set: &MeasurementSet, project: &str) -> RenderResult<String> {
        let charts = self.builder.build_named_project(set, project)?;
        let binding = self.project_binding(project);
        info!(project, devices = charts.len(), binding = %binding, "rendered project data");
        self.literal.render_binding(&binding, &charts)
    }

    /// The binding name used for a project's page data.
    pub fn project_binding(&self, project: &str) -> String {
        sanitize_identifier(&format!("{}{project}", self.project_prefix))
    }
}

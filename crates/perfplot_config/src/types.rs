//! Configuration types deserialized from `perfplot.toml`.

use serde::Deserialize;

/// The top-level render configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    /// Output binding and formatting settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Settings for the emitted chart literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Root binding for Summary and Full output (`var <binding> = ...`).
    pub binding: String,
    /// Prefix for the per-project root binding (`var <prefix><project> = ...`).
    pub project_prefix: String,
    /// Pretty-print the literal with indentation.
    pub pretty: bool,
    /// Reject series whose sample count differs from the device's date count.
    pub validate_lengths: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            binding: "data".to_string(),
            project_prefix: "data_".to_string(),
            pretty: true,
            validate_lengths: true,
        }
    }
}

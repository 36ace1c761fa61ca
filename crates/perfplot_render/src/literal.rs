//! `var <name> = <object literal>;` emission.

use serde::Serialize;

use crate::error::RenderResult;

/// Writes a value as a top-level chart-library variable binding.
///
/// The object literal is JSON text, which the chart pages evaluate as
/// JavaScript. Null samples therefore appear as `null`, and `fill` as `false`.
#[derive(Debug, Clone, Copy)]
pub struct LiteralRenderer {
    /// Indent nested values, one entry per line.
    pub pretty: bool,
}

impl LiteralRenderer {
    /// Creates a literal renderer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Renders the object literal for `value`.
    pub fn render_value<T: Serialize + ?Sized>(&self, value: &T) -> RenderResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    /// Renders `var <name> = <literal>;` followed by a newline.
    pub fn render_binding<T: Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
    ) -> RenderResult<String> {
        Ok(format!("var {name} = {};\n", self.render_value(value)?))
    }
}

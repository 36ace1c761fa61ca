//! Serializes built chart datasets into chart-library literal text.
//!
//! [`PageRenderer`] is the entry point: it builds a measurement set with
//! [`SeriesBuilder`](perfplot_chart::SeriesBuilder) in one of the three
//! shapes and emits a `var <binding> = {...};` statement the browser pages
//! include as a script.

#![warn(missing_docs)]

pub mod error;
pub mod literal;
pub mod page;

pub use error::{RenderError, RenderResult};
pub use literal::LiteralRenderer;
pub use page::{PageRenderer, RenderRequest};

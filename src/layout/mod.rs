//! Layout engine: measurement-driven wrapping, vertical flow, pagination.

mod engine;
mod flow;
mod style;
mod wrap;

pub use engine::LayoutEngine;
pub use flow::PageFlow;
pub use style::PageStyle;
pub use wrap::wrap;

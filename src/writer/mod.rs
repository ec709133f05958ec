//! Output sink abstraction and concrete writers.
//!
//! The layout engine emits draw commands through the [`DocumentWriter`]
//! trait and never touches a concrete output library. [`PdfDocumentWriter`]
//! produces the PDF bytes; [`TraceWriter`] records the command sequence
//! for inspection and testing.

mod pdf;
mod trace;

pub use pdf::{DocumentInfo, PdfDocumentWriter};
pub use trace::{DrawOp, TraceWriter};

use crate::error::Result;
use crate::font::FontDescriptor;

/// Capability for writing a paged document.
///
/// Callers drive the writer strictly top-down: open a page, draw onto it,
/// open the next page, and finally [`finish`](DocumentWriter::finish) the
/// whole document. Coordinates are in points with the origin at the
/// bottom-left of the page.
pub trait DocumentWriter {
    /// Finalize the current page (if any) and open a new one.
    fn begin_page(&mut self, width: f32, height: f32) -> Result<()>;

    /// Draw a single line of text with its baseline at `(x, y)`.
    fn draw_text(
        &mut self,
        text: &str,
        font: &FontDescriptor,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()>;

    /// Draw a horizontal rule from `x1` to `x2` at height `y`.
    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32) -> Result<()>;

    /// Close the document and serialize it to bytes.
    ///
    /// No draw calls may follow; writers report further use as an error.
    fn finish(&mut self) -> Result<Vec<u8>>;
}

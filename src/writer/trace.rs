//! A writer that records draw commands instead of producing output.

use crate::error::{Error, Result};
use crate::font::FontDescriptor;

use super::DocumentWriter;

/// One recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A page was opened.
    BeginPage {
        /// Page width in points
        width: f32,
        /// Page height in points
        height: f32,
    },
    /// A line of text was drawn.
    Text {
        /// Zero-based page index
        page: usize,
        /// Baseline x
        x: f32,
        /// Baseline y
        y: f32,
        /// Font size
        size: f32,
        /// Font used
        font: FontDescriptor,
        /// The drawn string
        text: String,
    },
    /// A horizontal rule was drawn.
    Rule {
        /// Zero-based page index
        page: usize,
        /// Left end
        x1: f32,
        /// Right end
        x2: f32,
        /// Height
        y: f32,
    },
}

/// Records the sequence of draw commands for inspection.
///
/// Useful in tests and for debugging layout decisions; `finish` yields no
/// bytes.
#[derive(Debug, Default)]
pub struct TraceWriter {
    ops: Vec<DrawOp>,
    pages: usize,
    finished: bool,
}

impl TraceWriter {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of pages opened.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// The drawn strings in order.
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The drawn strings on one page, in order.
    pub fn texts_on_page(&self, page: usize) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { page: p, text, .. } if *p == page => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn check_open(&self) -> Result<()> {
        if self.finished {
            return Err(Error::Render("document already finished".to_string()));
        }
        if self.pages == 0 {
            return Err(Error::Render("no page is open".to_string()));
        }
        Ok(())
    }
}

impl DocumentWriter for TraceWriter {
    fn begin_page(&mut self, width: f32, height: f32) -> Result<()> {
        if self.finished {
            return Err(Error::Render("document already finished".to_string()));
        }
        self.ops.push(DrawOp::BeginPage { width, height });
        self.pages += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: &FontDescriptor,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()> {
        self.check_open()?;
        self.ops.push(DrawOp::Text {
            page: self.pages - 1,
            x,
            y,
            size,
            font: *font,
            text: text.to_string(),
        });
        Ok(())
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32) -> Result<()> {
        self.check_open()?;
        self.ops.push(DrawOp::Rule {
            page: self.pages - 1,
            x1,
            x2,
            y,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        self.check_open()?;
        self.finished = true;
        Ok(Vec::new())
    }
}

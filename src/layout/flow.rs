//! Page cursor and page-break policy.

use crate::error::Result;
use crate::writer::DocumentWriter;

use super::style::PageStyle;

/// The vertical layout cursor over a sequence of pages.
///
/// A `PageFlow` is created per render call and discarded afterwards; it
/// tracks the current baseline position and opens a new page whenever the
/// next content unit would not fit above the bottom margin.
/// [`ensure_space`](PageFlow::ensure_space) is the sole page-break
/// trigger and must run before every draw that consumes vertical space.
#[derive(Debug)]
pub struct PageFlow {
    style: PageStyle,
    y: f32,
    pages_opened: u32,
}

impl PageFlow {
    /// Open the first page and place the cursor at the top margin.
    pub fn open(style: PageStyle, writer: &mut dyn DocumentWriter) -> Result<Self> {
        let mut flow = Self {
            style,
            y: 0.0,
            pages_opened: 0,
        };
        flow.break_page(writer)?;
        Ok(flow)
    }

    /// Break to a new page if `height` does not fit above the bottom margin.
    pub fn ensure_space(&mut self, writer: &mut dyn DocumentWriter, height: f32) -> Result<()> {
        if self.y - height < self.style.margin {
            self.break_page(writer)?;
        }
        Ok(())
    }

    /// Move the cursor down after content was drawn.
    pub fn advance(&mut self, amount: f32) {
        self.y -= amount;
    }

    /// Current baseline position, measured from the page bottom.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Number of pages opened so far.
    pub fn pages_opened(&self) -> u32 {
        self.pages_opened
    }

    fn break_page(&mut self, writer: &mut dyn DocumentWriter) -> Result<()> {
        writer.begin_page(self.style.page_width, self.style.page_height)?;
        self.y = self.style.page_height - self.style.margin;
        self.pages_opened += 1;
        if self.pages_opened > 1 {
            log::debug!("page break: opened page {}", self.pages_opened);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::TraceWriter;

    #[test]
    fn test_open_places_cursor_at_top_margin() {
        let style = PageStyle::default();
        let mut writer = TraceWriter::new();
        let flow = PageFlow::open(style, &mut writer).unwrap();
        assert_eq!(flow.y(), style.page_height - style.margin);
        assert_eq!(flow.pages_opened(), 1);
        assert_eq!(writer.page_count(), 1);
    }

    #[test]
    fn test_ensure_space_noop_when_room() {
        let style = PageStyle::default();
        let mut writer = TraceWriter::new();
        let mut flow = PageFlow::open(style, &mut writer).unwrap();
        flow.ensure_space(&mut writer, 100.0).unwrap();
        assert_eq!(flow.pages_opened(), 1);
        assert_eq!(flow.y(), style.page_height - style.margin);
    }

    #[test]
    fn test_ensure_space_breaks_exactly_at_margin() {
        let style = PageStyle::default();
        let mut writer = TraceWriter::new();
        let mut flow = PageFlow::open(style, &mut writer).unwrap();

        // Consume everything above the bottom margin except 20 points.
        flow.advance(style.page_height - 2.0 * style.margin - 20.0);
        flow.ensure_space(&mut writer, 20.0).unwrap();
        assert_eq!(flow.pages_opened(), 1, "exact fit must not break");

        flow.ensure_space(&mut writer, 20.1).unwrap();
        assert_eq!(flow.pages_opened(), 2);
        assert_eq!(flow.y(), style.page_height - style.margin);
    }

    #[test]
    fn test_advance_moves_down() {
        let style = PageStyle::default();
        let mut writer = TraceWriter::new();
        let mut flow = PageFlow::open(style, &mut writer).unwrap();
        let before = flow.y();
        flow.advance(14.85);
        assert!((before - flow.y() - 14.85).abs() < 1e-5);
    }
}

//! The rendering walk from content model to draw commands.

use crate::error::{Error, Result};
use crate::font::{self, FontDescriptor};
use crate::model::{ContentModel, Section, SectionKind, PLACEHOLDER};
use crate::writer::DocumentWriter;

use super::flow::PageFlow;
use super::style::PageStyle;
use super::wrap::wrap;

/// Renders a [`ContentModel`] through a [`DocumentWriter`].
///
/// The walk is a single synchronous top-to-bottom pass: title, rule, then
/// each section in order, breaking pages through [`PageFlow`] whenever the
/// next line would cross the bottom margin. Rendering the same model twice
/// produces the same draw-command sequence.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    style: PageStyle,
}

impl LayoutEngine {
    /// Create an engine with the standard card style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style constants in effect for this engine.
    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    /// Render `model` and finalize the writer, returning the serialized
    /// document.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] for a model without a title
    /// (rejected before any page is opened), [`Error::Measure`] when a
    /// string cannot be measured, or whatever the writer reports.
    pub fn render(&self, model: &ContentModel, writer: &mut dyn DocumentWriter) -> Result<Vec<u8>> {
        if model.title.is_empty() {
            return Err(Error::InvalidArgument(
                "content model has no title".to_string(),
            ));
        }

        let body = FontDescriptor::helvetica();
        let bold = FontDescriptor::helvetica_bold();
        let s = &self.style;

        let mut flow = PageFlow::open(self.style, writer)?;

        // Centered title; an over-wide title left-aligns at the margin
        // instead of starting at a negative coordinate.
        let title_width = font::text_width(&model.title, &bold, s.title_size)?;
        let start_x = s.margin + ((s.usable_width() - title_width) / 2.0).max(0.0);
        flow.ensure_space(writer, s.title_size + 4.0)?;
        writer.draw_text(&model.title, &bold, s.title_size, start_x, flow.y())?;
        flow.advance(s.line_height(s.title_size));

        flow.advance(s.rule_gap);
        flow.ensure_space(writer, s.rule_gap)?;
        writer.draw_rule(s.margin, s.margin + s.usable_width(), flow.y())?;
        flow.advance(s.rule_gap);
        flow.advance(s.section_spacing);

        for section in &model.sections {
            self.render_section(section, &body, &bold, &mut flow, writer)?;
        }

        log::debug!(
            "laid out \"{}\": {} sections across {} pages",
            model.title,
            model.sections.len(),
            flow.pages_opened()
        );

        writer.finish()
    }

    fn render_section(
        &self,
        section: &Section,
        body: &FontDescriptor,
        bold: &FontDescriptor,
        flow: &mut PageFlow,
        writer: &mut dyn DocumentWriter,
    ) -> Result<()> {
        let s = &self.style;

        flow.ensure_space(writer, s.section_size + 8.0)?;
        writer.draw_text(&section.heading, bold, s.section_size, s.margin, flow.y())?;
        flow.advance(s.line_height(s.section_size));

        match section.kind {
            SectionKind::List => {
                let placeholder = [PLACEHOLDER.to_string()];
                let items: &[String] = if section.items.is_empty() {
                    &placeholder
                } else {
                    &section.items
                };
                for item in items {
                    let bullet = format!("\u{2022} {item}");
                    self.draw_wrapped(&bullet, body, s.list_indent, flow, writer)?;
                }
            }
            SectionKind::Paragraph => {
                if section.items.is_empty() {
                    self.draw_wrapped(PLACEHOLDER, body, 0.0, flow, writer)?;
                } else {
                    for (i, block) in section.items.iter().enumerate() {
                        if i > 0 {
                            flow.advance(0.6 * s.body_size);
                        }
                        self.draw_wrapped(block, body, 0.0, flow, writer)?;
                    }
                }
            }
        }

        flow.advance(s.section_spacing);
        Ok(())
    }

    /// Wrap `text` into the remaining width at `indent` and draw each line,
    /// breaking pages as needed. Break decisions happen before drawing, so
    /// no line is ever split across a page boundary.
    fn draw_wrapped(
        &self,
        text: &str,
        font: &FontDescriptor,
        indent: f32,
        flow: &mut PageFlow,
        writer: &mut dyn DocumentWriter,
    ) -> Result<()> {
        let s = &self.style;
        let budget = s.usable_width() - indent;
        for line in wrap(text, font, s.body_size, budget)? {
            flow.ensure_space(writer, s.body_line_height())?;
            writer.draw_text(&line, font, s.body_size, s.margin + indent, flow.y())?;
            flow.advance(s.body_line_height());
        }
        Ok(())
    }
}

//! PDF output adapter built on the `pdf-writer` crate.

use std::io::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::{Error, Result};
use crate::font::{self, FontDescriptor};

use super::DocumentWriter;

/// Metadata written to the PDF Info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Producer string
    pub producer: String,
    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: None,
            producer: concat!("recipress ", env!("CARGO_PKG_VERSION")).to_string(),
            created: None,
        }
    }
}

struct PageEntry {
    id: Ref,
    content_id: Ref,
    width: f32,
    height: f32,
}

/// A [`DocumentWriter`] that serializes to PDF.
///
/// Pages use the standard fourteen Helvetica faces (no font embedding) and
/// WinAnsi-encoded text. Content streams are Flate-compressed. Everything
/// is buffered in memory until [`finish`](DocumentWriter::finish) returns
/// the document bytes; nothing touches the filesystem here.
pub struct PdfDocumentWriter {
    pdf: Pdf,
    next_ref: i32,
    catalog_id: Ref,
    page_tree_id: Ref,
    pages: Vec<PageEntry>,
    content: Option<Content>,
    fonts: Vec<(FontDescriptor, String, Ref)>,
    info: DocumentInfo,
    finished: bool,
}

impl PdfDocumentWriter {
    /// Create a writer with the given document metadata.
    pub fn new(info: DocumentInfo) -> Self {
        let mut writer = Self {
            pdf: Pdf::new(),
            next_ref: 1,
            catalog_id: Ref::new(1),
            page_tree_id: Ref::new(2),
            pages: Vec::new(),
            content: None,
            fonts: Vec::new(),
            info,
            finished: false,
        };
        writer.catalog_id = writer.alloc();
        writer.page_tree_id = writer.alloc();
        writer
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_ref);
        self.next_ref += 1;
        id
    }

    /// Resource name and object reference for a font, registering it on
    /// first use.
    fn font_resource(&mut self, font: &FontDescriptor) -> (String, Ref) {
        if let Some((_, name, id)) = self.fonts.iter().find(|(f, _, _)| f == font) {
            return (name.clone(), *id);
        }
        let id = self.alloc();
        let name = format!("F{}", self.fonts.len() + 1);
        self.pdf
            .type1_font(id)
            .base_font(Name(font.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        self.fonts.push((*font, name.clone(), id));
        (name, id)
    }

    /// Flate-compress and emit the open page's content stream, if any.
    fn close_content(&mut self) -> Result<()> {
        if let Some(content) = self.content.take() {
            let raw = content.finish();
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&raw)?;
            let compressed = encoder.finish()?;

            let content_id = self
                .pages
                .last()
                .map(|p| p.content_id)
                .ok_or_else(|| Error::Render("content stream without a page".to_string()))?;
            self.pdf
                .stream(content_id, &compressed)
                .filter(Filter::FlateDecode);
        }
        Ok(())
    }

    fn content_mut(&mut self) -> Result<&mut Content> {
        if self.finished {
            return Err(Error::Render("document already finished".to_string()));
        }
        self.content
            .as_mut()
            .ok_or_else(|| Error::Render("no page is open".to_string()))
    }
}

impl Default for PdfDocumentWriter {
    fn default() -> Self {
        Self::new(DocumentInfo::default())
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn begin_page(&mut self, width: f32, height: f32) -> Result<()> {
        if self.finished {
            return Err(Error::Render("document already finished".to_string()));
        }
        self.close_content()?;
        let id = self.alloc();
        let content_id = self.alloc();
        self.pages.push(PageEntry {
            id,
            content_id,
            width,
            height,
        });
        self.content = Some(Content::new());
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
        let (name, _) = self.font_resource(font);
        let bytes = font::encode_winansi(text)?;
        let content = self.content_mut()?;
        content
            .begin_text()
            .set_font(Name(name.as_bytes()), size)
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
        Ok(())
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32) -> Result<()> {
        let content = self.content_mut()?;
        content.move_to(x1, y).line_to(x2, y).stroke();
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        if self.finished {
            return Err(Error::Render("document already finished".to_string()));
        }
        self.close_content()?;
        self.finished = true;

        let kids: Vec<Ref> = self.pages.iter().map(|p| p.id).collect();
        self.pdf
            .pages(self.page_tree_id)
            .kids(kids.iter().copied())
            .count(kids.len() as i32);

        for entry in &self.pages {
            let mut page = self.pdf.page(entry.id);
            page.media_box(Rect::new(0.0, 0.0, entry.width, entry.height))
                .parent(self.page_tree_id)
                .contents(entry.content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (_, name, id) in &self.fonts {
                fonts.pair(Name(name.as_bytes()), *id);
            }
        }

        self.pdf.catalog(self.catalog_id).pages(self.page_tree_id);

        let info_id = self.alloc();
        let mut info = self.pdf.document_info(info_id);
        if let Some(ref title) = self.info.title {
            info.title(TextStr(title));
        }
        info.producer(TextStr(&self.info.producer));
        if let Some(created) = self.info.created {
            info.creation_date(
                Date::new(created.year() as u16)
                    .month(created.month() as u8)
                    .day(created.day() as u8)
                    .hour(created.hour() as u8)
                    .minute(created.minute() as u8)
                    .second(created.second() as u8)
                    .utc_offset_hour(0)
                    .utc_offset_minute(0),
            );
        }
        drop(info);

        let pdf = std::mem::replace(&mut self.pdf, Pdf::new());
        Ok(pdf.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_document() {
        let mut writer = PdfDocumentWriter::default();
        writer.begin_page(612.0, 792.0).unwrap();
        writer
            .draw_text("Hello", &FontDescriptor::helvetica(), 11.0, 54.0, 700.0)
            .unwrap();
        let bytes = writer.finish().unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF") || bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_draw_without_page_fails() {
        let mut writer = PdfDocumentWriter::default();
        let err = writer
            .draw_text("x", &FontDescriptor::helvetica(), 11.0, 0.0, 0.0)
            .unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_finish_twice_fails() {
        let mut writer = PdfDocumentWriter::default();
        writer.begin_page(612.0, 792.0).unwrap();
        writer.finish().unwrap();
        assert!(writer.finish().is_err());
    }

    #[test]
    fn test_fonts_registered_once() {
        let mut writer = PdfDocumentWriter::default();
        writer.begin_page(612.0, 792.0).unwrap();
        let bold = FontDescriptor::helvetica_bold();
        writer.draw_text("a", &bold, 13.0, 54.0, 700.0).unwrap();
        writer.draw_text("b", &bold, 13.0, 54.0, 680.0).unwrap();
        assert_eq!(writer.fonts.len(), 1);
    }
}

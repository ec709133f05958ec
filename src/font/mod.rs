//! Font descriptors and deterministic text measurement.
//!
//! The exporter uses the standard fourteen PDF fonts, so no font data is
//! embedded in the output; widths come from the bundled AFM tables in
//! [`metrics`]. Measurement is a pure function of (text, font, size) and
//! fails when a character has no WinAnsi encoding, never substituting a
//! fallback glyph.

mod metrics;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Font family available to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Helvetica, one of the standard fourteen fonts.
    #[default]
    Helvetica,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Regular,
    /// Bold weight
    Bold,
}

/// An explicit font selection passed to measurement and drawing calls.
///
/// Carrying the descriptor as a value keeps the engine free of any
/// process-wide font registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family
    pub family: FontFamily,
    /// Font weight
    pub weight: FontWeight,
}

impl FontDescriptor {
    /// Regular Helvetica.
    pub const fn helvetica() -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Regular,
        }
    }

    /// Bold Helvetica.
    pub const fn helvetica_bold() -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Bold,
        }
    }

    /// PostScript base font name used in the PDF font dictionary.
    pub fn base_name(&self) -> &'static str {
        match (self.family, self.weight) {
            (FontFamily::Helvetica, FontWeight::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontWeight::Bold) => "Helvetica-Bold",
        }
    }

    /// Whether this descriptor selects a bold face.
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

/// Measure the rendered width of `text` at the given font and size.
///
/// Returns the advance width in points. Deterministic for a given input
/// triple, so wrapping and centering decisions are reproducible.
///
/// # Errors
///
/// Returns [`Error::Measure`] when any character cannot be measured with
/// the selected font.
pub fn text_width(text: &str, font: &FontDescriptor, size: f32) -> Result<f32> {
    let bold = font.is_bold();
    let mut total: u32 = 0;
    for c in text.chars() {
        total += u32::from(glyph_width(c, bold)?);
    }
    Ok(total as f32 / 1000.0 * size)
}

/// Encode `text` as WinAnsi bytes for a PDF string operand.
///
/// # Errors
///
/// Returns [`Error::Measure`] when a character falls outside the WinAnsi
/// repertoire.
pub fn encode_winansi(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            metrics::winansi_byte(c)
                .ok_or_else(|| Error::Measure(format!("character {:?} is not WinAnsi-encodable", c)))
        })
        .collect()
}

fn glyph_width(c: char, bold: bool) -> Result<u16> {
    if let Some(w) = metrics::ascii_width(c, bold) {
        return Ok(w);
    }
    if let Some(w) = metrics::symbol_width(c, bold) {
        return Ok(w);
    }
    // Accented Latin letters share the advance of their base letter in the
    // core AFM tables, so decompose and measure the base.
    if metrics::winansi_byte(c).is_some() {
        if let Some(base) = c.nfd().next() {
            if let Some(w) = metrics::ascii_width(base, bold) {
                return Ok(w);
            }
        }
    }
    Err(Error::Measure(format!(
        "no metric for character {:?} in {}",
        c,
        if bold { "Helvetica-Bold" } else { "Helvetica" }
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_deterministic() {
        let font = FontDescriptor::helvetica();
        let a = text_width("Pancakes", &font, 11.0).unwrap();
        let b = text_width("Pancakes", &font, 11.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_width_scales_with_size() {
        let font = FontDescriptor::helvetica();
        let small = text_width("flour", &font, 10.0).unwrap();
        let large = text_width("flour", &font, 20.0).unwrap();
        assert!((large - small * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_string_zero_width() {
        let font = FontDescriptor::helvetica_bold();
        assert_eq!(text_width("", &font, 12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_accented_letter_measures_as_base() {
        let font = FontDescriptor::helvetica();
        let plain = text_width("creme", &font, 11.0).unwrap();
        let accented = text_width("crème", &font, 11.0).unwrap();
        assert!((plain - accented).abs() < 1e-4);
    }

    #[test]
    fn test_unmeasurable_char_fails() {
        let font = FontDescriptor::helvetica();
        let err = text_width("김치", &font, 11.0).unwrap_err();
        assert!(matches!(err, Error::Measure(_)));
    }

    #[test]
    fn test_base_names() {
        assert_eq!(FontDescriptor::helvetica().base_name(), "Helvetica");
        assert_eq!(
            FontDescriptor::helvetica_bold().base_name(),
            "Helvetica-Bold"
        );
    }

    #[test]
    fn test_encode_winansi_roundtrip_ascii() {
        let bytes = encode_winansi("Mix. Cook.").unwrap();
        assert_eq!(bytes, b"Mix. Cook.");
    }

    #[test]
    fn test_encode_winansi_bullet() {
        let bytes = encode_winansi("• egg").unwrap();
        assert_eq!(bytes[0], 0x95);
    }
}

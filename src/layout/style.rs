//! Page geometry and typographic constants.

/// Fixed style constants for one render.
///
/// The card layout is intentionally not configurable per call; every
/// export uses the same Letter geometry and type scale.
#[derive(Debug, Clone, Copy)]
pub struct PageStyle {
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    /// Margin on all four sides
    pub margin: f32,
    /// Title font size
    pub title_size: f32,
    /// Section heading font size
    pub section_size: f32,
    /// Body font size
    pub body_size: f32,
    /// Line height multiplier applied to font sizes
    pub line_spacing: f32,
    /// Vertical gap after each section
    pub section_spacing: f32,
    /// Indent for bulleted list items
    pub list_indent: f32,
    /// Gap above and below the title rule
    pub rule_gap: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        // US Letter, 8.5 x 11 inches at 72 points per inch.
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 54.0,
            title_size: 20.0,
            section_size: 13.0,
            body_size: 11.0,
            line_spacing: 1.35,
            section_spacing: 12.0,
            list_indent: 14.0,
            rule_gap: 6.0,
        }
    }
}

impl PageStyle {
    /// Horizontal space available between the margins.
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Line height for the given font size.
    pub fn line_height(&self, size: f32) -> f32 {
        size * self.line_spacing
    }

    /// Line height of body text.
    pub fn body_line_height(&self) -> f32 {
        self.line_height(self.body_size)
    }
}

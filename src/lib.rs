//! # recipress
//!
//! Recipe card typesetting and multi-page PDF export for Rust.
//!
//! This library converts a structured recipe record into a fixed-size,
//! multi-page PDF document with font-metric-based word-wrapping, vertical
//! flow, and automatic page breaks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipress::{export_recipe, Recipe};
//!
//! fn main() -> recipress::Result<()> {
//!     let recipe = Recipe {
//!         name: "Pancakes".into(),
//!         ingredients: vec!["flour".into(), "milk".into(), "egg".into()],
//!         tags: vec!["breakfast".into()],
//!         instructions: "Mix everything.\n\nCook on a hot griddle.".into(),
//!     };
//!
//!     export_recipe("pancakes.pdf", &recipe, &[])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic layout**: the same record always yields the same
//!   sequence of draw commands
//! - **Correct pagination**: page breaks are decided before drawing, so no
//!   line is ever split across a page boundary
//! - **No font embedding**: the standard Helvetica faces with bundled AFM
//!   metrics keep the output small
//! - **Pluggable output**: the engine draws through a writer trait, with a
//!   recording writer for inspection and testing

pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod writer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use font::{FontDescriptor, FontFamily, FontWeight};
pub use layout::{LayoutEngine, PageStyle};
pub use model::{ContentModel, Recipe, Section, SectionKind};
pub use writer::{DocumentInfo, DocumentWriter, DrawOp, PdfDocumentWriter, TraceWriter};

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Utc;

/// Export a recipe card PDF to `path`.
///
/// `related_names` are the display names of related recipes, resolved by
/// the caller. The destination is opened before layout starts, so an
/// unwritable path fails fast; the file is only written after the whole
/// document rendered successfully, never partially.
///
/// # Example
///
/// ```no_run
/// use recipress::{export_recipe, Recipe};
///
/// let recipe = Recipe::new("Pancakes");
/// export_recipe("pancakes.pdf", &recipe, &[]).unwrap();
/// ```
pub fn export_recipe<P: AsRef<Path>>(
    path: P,
    recipe: &Recipe,
    related_names: &[String],
) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(
            "destination path is empty".to_string(),
        ));
    }
    let file = File::create(path)?;
    let bytes = render_recipe(recipe, related_names)?;
    let mut file = std::io::BufWriter::new(file);
    file.write_all(&bytes)?;
    file.flush()?;
    Ok(())
}

/// Render a recipe card and return the PDF bytes.
pub fn render_recipe(recipe: &Recipe, related_names: &[String]) -> Result<Vec<u8>> {
    let model = ContentModel::from_recipe(recipe, related_names);
    render_model(&model)
}

/// Render an already-built content model and return the PDF bytes.
pub fn render_model(model: &ContentModel) -> Result<Vec<u8>> {
    let info = DocumentInfo {
        title: Some(model.title.clone()),
        created: Some(Utc::now()),
        ..DocumentInfo::default()
    };
    let mut writer = PdfDocumentWriter::new(info);
    LayoutEngine::new().render(model, &mut writer)
}

/// Builder for exporting recipe cards.
///
/// # Example
///
/// ```no_run
/// use recipress::{Exporter, Recipe};
///
/// let recipe = Recipe::new("Pancakes");
/// Exporter::new()
///     .with_related(vec!["Waffles".into()])
///     .export("pancakes.pdf", &recipe)
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Exporter {
    related: Vec<String>,
}

impl Exporter {
    /// Create a new exporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display names of related recipes.
    pub fn with_related(mut self, related: Vec<String>) -> Self {
        self.related = related;
        self
    }

    /// Export the recipe card to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P, recipe: &Recipe) -> Result<()> {
        export_recipe(path, recipe, &self.related)
    }

    /// Render the recipe card to PDF bytes.
    pub fn render(&self, recipe: &Recipe) -> Result<Vec<u8>> {
        render_recipe(recipe, &self.related)
    }
}

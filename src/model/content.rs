//! The structured content model handed to the layout engine.
//!
//! A [`ContentModel`] is built once per render from a [`Recipe`] and is
//! read-only afterwards; the engine never mutates it.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::recipe::{sanitize_items, Recipe};

/// Title shown when a recipe has no usable name.
pub const UNTITLED: &str = "Untitled Recipe";

/// Placeholder rendered for sections without content.
pub const PLACEHOLDER: &str = "None";

/// How a section's items are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Each item is one bullet.
    List,
    /// Items are pre-split paragraph blocks.
    Paragraph,
}

/// A titled block of content, either a bulleted list or paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub heading: String,

    /// Layout kind
    pub kind: SectionKind,

    /// List items or paragraph blocks; empty renders as a placeholder
    pub items: Vec<String>,
}

impl Section {
    /// Create a list section.
    pub fn list(heading: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::List,
            items,
        }
    }

    /// Create a paragraph section from free text, splitting on blank-line
    /// boundaries.
    pub fn paragraph(heading: impl Into<String>, text: &str) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Paragraph,
            items: split_paragraph_blocks(text),
        }
    }
}

/// The document content for one render call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentModel {
    /// Document title
    pub title: String,

    /// Sections in render order
    pub sections: Vec<Section>,
}

impl ContentModel {
    /// Build the content model for a recipe card.
    ///
    /// Sections appear in the fixed order Ingredients, Tags, Instructions,
    /// Related Recipes. List items are trimmed and blank entries dropped.
    pub fn from_recipe(recipe: &Recipe, related_names: &[String]) -> Self {
        let title = if recipe.name.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            recipe.name.trim().to_string()
        };

        Self {
            title,
            sections: vec![
                Section::list("Ingredients", sanitize_items(&recipe.ingredients)),
                Section::list("Tags", sanitize_items(&recipe.tags)),
                Section::paragraph("Instructions", &recipe.instructions),
                Section::list("Related Recipes", sanitize_items(related_names)),
            ],
        }
    }

    /// Serialize the model to pretty JSON, handy for debugging exports.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::Error::Render(e.to_string()))
    }
}

/// Split free text into paragraph blocks on blank-line boundaries.
///
/// Single newlines stay inside a block and flow as spaces through the
/// wrapper. Blank or whitespace-only input yields no blocks.
pub fn split_paragraph_blocks(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let boundary = Regex::new(r"\r?\n\s*\r?\n").unwrap();
    boundary
        .split(trimmed)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks_blank_line() {
        assert_eq!(split_paragraph_blocks("Mix.\n\nCook."), vec!["Mix.", "Cook."]);
    }

    #[test]
    fn test_split_blocks_single_newline_stays() {
        assert_eq!(split_paragraph_blocks("Mix well\nand rest."), vec!["Mix well\nand rest."]);
    }

    #[test]
    fn test_split_blocks_crlf_and_extra_blank() {
        assert_eq!(
            split_paragraph_blocks("One.\r\n\r\n\r\nTwo."),
            vec!["One.", "Two."]
        );
    }

    #[test]
    fn test_split_blocks_empty() {
        assert!(split_paragraph_blocks("").is_empty());
        assert!(split_paragraph_blocks("  \n \n ").is_empty());
    }

    #[test]
    fn test_from_recipe_section_order() {
        let recipe = Recipe {
            name: "Pancakes".into(),
            ingredients: vec!["flour".into(), "milk".into()],
            tags: vec!["breakfast".into()],
            instructions: "Mix.\n\nCook.".into(),
        };
        let model = ContentModel::from_recipe(&recipe, &[]);

        assert_eq!(model.title, "Pancakes");
        let headings: Vec<&str> = model.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec!["Ingredients", "Tags", "Instructions", "Related Recipes"]
        );
        assert_eq!(model.sections[2].kind, SectionKind::Paragraph);
        assert_eq!(model.sections[2].items, vec!["Mix.", "Cook."]);
        assert!(model.sections[3].items.is_empty());
    }

    #[test]
    fn test_to_json_roundtrip() {
        let model = ContentModel::from_recipe(&Recipe::new("Toast"), &[]);
        let json = model.to_json().unwrap();
        let back: ContentModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Toast");
        assert_eq!(back.sections.len(), 4);
    }

    #[test]
    fn test_from_recipe_blank_name_placeholder() {
        let recipe = Recipe::new("   ");
        let model = ContentModel::from_recipe(&recipe, &[]);
        assert_eq!(model.title, UNTITLED);
    }
}

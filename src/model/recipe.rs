//! Recipe record types.

use serde::{Deserialize, Serialize};

/// A recipe record as provided by the surrounding application.
///
/// Related recipes are stored by the application as identifiers; the
/// caller resolves them to display names before export and passes the
/// names alongside the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name; blank names render under a placeholder title.
    #[serde(default)]
    pub name: String,

    /// Ingredient lines, one entry per ingredient.
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text cooking instructions; blank lines separate paragraphs.
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// Create an empty recipe with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Trim list entries and drop the empty ones.
pub(crate) fn sanitize_items(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_items() {
        let raw = vec![
            "  flour ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "milk".to_string(),
        ];
        assert_eq!(sanitize_items(&raw), vec!["flour", "milk"]);
    }

    #[test]
    fn test_recipe_deserialize_defaults() {
        let recipe: Recipe = serde_json::from_str(r#"{"name":"Pancakes"}"#).unwrap();
        assert_eq!(recipe.name, "Pancakes");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }
}

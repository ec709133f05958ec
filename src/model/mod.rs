//! Content model types.

mod content;
mod recipe;

pub use content::{
    split_paragraph_blocks, ContentModel, Section, SectionKind, PLACEHOLDER, UNTITLED,
};
pub use recipe::Recipe;

//! Greedy word-wrapping against a width budget.

use crate::error::Result;
use crate::font::{self, FontDescriptor};

/// Split `text` into lines no wider than `max_width` points.
///
/// Words are packed greedily: the line grows while the measured candidate
/// still fits, and breaks the moment the next word would overflow. A
/// single word wider than the budget is emitted as its own overflowing
/// line rather than being broken mid-word. Input without words yields an
/// empty sequence.
pub fn wrap(text: &str, font: &FontDescriptor, size: f32, max_width: f32) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if font::text_width(&candidate, font, size)? <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> FontDescriptor {
        FontDescriptor::helvetica()
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap("flour and milk", &body(), 11.0, 500.0).unwrap();
        assert_eq!(lines, vec!["flour and milk"]);
    }

    #[test]
    fn test_lines_fit_budget() {
        let text = "a moderately long instruction sentence that will need to wrap \
                    across several lines at this narrow width";
        let budget = 120.0;
        let lines = wrap(text, &body(), 11.0, budget).unwrap();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font::text_width(line, &body(), 11.0).unwrap() <= budget);
        }
    }

    #[test]
    fn test_no_word_is_split() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap(text, &body(), 11.0, 60.0).unwrap();
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(
            rejoined,
            text.split(' ').collect::<Vec<_>>(),
            "wrapping must preserve every word intact and in order"
        );
    }

    #[test]
    fn test_overwide_word_emitted_alone() {
        let lines = wrap("tiny supercalifragilisticexpialidocious end", &body(), 11.0, 50.0).unwrap();
        assert!(lines.contains(&"supercalifragilisticexpialidocious".to_string()));
        // The over-wide word overflows its budget but is never broken.
        let w = font::text_width("supercalifragilisticexpialidocious", &body(), 11.0).unwrap();
        assert!(w > 50.0);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(wrap("", &body(), 11.0, 100.0).unwrap().is_empty());
        assert!(wrap("   \n\t ", &body(), 11.0, 100.0).unwrap().is_empty());
    }

    #[test]
    fn test_newlines_treated_as_whitespace() {
        let lines = wrap("mix\nwell", &body(), 11.0, 500.0).unwrap();
        assert_eq!(lines, vec!["mix well"]);
    }
}

//! Locating the three plan sections in raw model output.
//!
//! Two strategies, tried in order: split on numbered `# N. ` headers, then
//! fall back to searching for the header phrases anywhere in the text.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::prompt::SECTION_HEADERS;

static NUMBERED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]*\d+\.\s").expect("header pattern is valid"));

/// How the sections were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMode {
    /// Numbered headers split the text into preamble plus three sections
    Structured,
    /// Header phrases were searched for case-insensitively
    Fallback,
}

impl fmt::Display for SectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionMode::Structured => f.write_str("structured"),
            SectionMode::Fallback => f.write_str("fallback"),
        }
    }
}

/// Text regions of a plan; any of them may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sections<'a> {
    pub summary: &'a str,
    pub shopping: &'a str,
    pub recipes: &'a str,
}

/// Picks the first strategy that applies.
pub fn locate_sections(raw: &str) -> (SectionMode, Sections<'_>) {
    match split_numbered(raw) {
        Some(sections) => (SectionMode::Structured, sections),
        None => (SectionMode::Fallback, split_by_phrases(raw)),
    }
}

/// Splits on lines starting with `#`, a number and a period.
///
/// Returns `None` unless that yields a preamble plus at least three sections.
/// Sections are taken by position; anything after the third is ignored.
pub fn split_numbered(raw: &str) -> Option<Sections<'_>> {
    let segments: Vec<&str> = NUMBERED_HEADER.split(raw).collect();
    if segments.len() < 4 {
        return None;
    }
    Some(Sections {
        summary: segments[1],
        shopping: segments[2],
        recipes: segments[3],
    })
}

/// Carves regions out of the text by searching for the header phrases.
///
/// Each region runs from its header to the next header found, or the end of
/// the text. A missing shopping or recipes header leaves that region empty.
/// A missing summary header makes the summary region everything before the
/// first header found, so bare `Day: meal` lines are still picked up.
pub fn split_by_phrases(raw: &str) -> Sections<'_> {
    // ASCII uppercasing keeps byte offsets aligned with `raw`.
    let upper = raw.to_ascii_uppercase();
    let positions = SECTION_HEADERS.map(|header| upper.find(header));

    let next_header_after = |start: usize| {
        positions
            .iter()
            .flatten()
            .copied()
            .filter(|&pos| pos > start)
            .min()
            .unwrap_or(raw.len())
    };
    let region = |index: usize| match positions[index] {
        Some(start) => &raw[start..next_header_after(start)],
        None => "",
    };

    let summary = match positions[0] {
        Some(_) => region(0),
        None => {
            let end = positions.iter().flatten().copied().min().unwrap_or(raw.len());
            &raw[..end]
        }
    };

    Sections {
        summary,
        shopping: region(1),
        recipes: region(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_split() {
        let raw = "Here you go!\n# 1. MEAL PLAN SUMMARY\nMonday: Tacos\n# 2. SHOPPING LIST\n## Produce\n- onion\n# 3. DETAILED RECIPES\n## Monday: Tacos\n";
        let (mode, sections) = locate_sections(raw);
        assert_eq!(mode, SectionMode::Structured);
        assert_eq!(sections.summary, "MEAL PLAN SUMMARY\nMonday: Tacos\n");
        assert_eq!(sections.shopping, "SHOPPING LIST\n## Produce\n- onion\n");
        assert_eq!(sections.recipes, "DETAILED RECIPES\n## Monday: Tacos\n");
    }

    #[test]
    fn test_numbered_split_needs_three_sections() {
        let raw = "# 1. MEAL PLAN SUMMARY\nMonday: Tacos\n# 2. SHOPPING LIST\n- onion\n";
        assert_eq!(split_numbered(raw), None);
        assert_eq!(locate_sections(raw).0, SectionMode::Fallback);
    }

    #[test]
    fn test_double_hash_is_not_a_numbered_header() {
        let raw = "## 1. a\n## 2. b\n## 3. c\n";
        assert_eq!(split_numbered(raw), None);
    }

    #[test]
    fn test_phrase_split_case_insensitive() {
        let raw = "**Meal Plan Summary**\nMonday: Tacos\n\n**Shopping list**\n## Produce\n- onion\n\nDetailed Recipes\n## Monday: Tacos\n";
        let sections = split_by_phrases(raw);
        assert!(sections.summary.starts_with("Meal Plan Summary"));
        assert!(sections.summary.contains("Monday: Tacos"));
        assert!(!sections.summary.contains("onion"));
        assert!(sections.shopping.starts_with("Shopping list"));
        assert!(sections.shopping.contains("- onion"));
        assert!(sections.recipes.starts_with("Detailed Recipes"));
    }

    #[test]
    fn test_phrase_split_out_of_order() {
        let raw = "SHOPPING LIST\n- milk\nMEAL PLAN SUMMARY\nMonday: Tacos\n";
        let sections = split_by_phrases(raw);
        assert_eq!(sections.shopping, "SHOPPING LIST\n- milk\n");
        assert_eq!(sections.summary, "MEAL PLAN SUMMARY\nMonday: Tacos\n");
        assert_eq!(sections.recipes, "");
    }

    #[test]
    fn test_phrase_split_without_headers() {
        let raw = "Monday: Tacos\nTuesday: Soup";
        let sections = split_by_phrases(raw);
        assert_eq!(sections.summary, raw);
        assert_eq!(sections.shopping, "");
        assert_eq!(sections.recipes, "");
    }

    #[test]
    fn test_missing_summary_header_uses_preamble() {
        let raw = "Monday: Tacos\nSHOPPING LIST\n## Produce\n- onion\n";
        let sections = split_by_phrases(raw);
        assert_eq!(sections.summary, "Monday: Tacos\n");
    }

    #[test]
    fn test_empty_input() {
        let (mode, sections) = locate_sections("");
        assert_eq!(mode, SectionMode::Fallback);
        assert_eq!(sections, Sections::default());
    }
}

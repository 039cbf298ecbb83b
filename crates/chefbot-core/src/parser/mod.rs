//! Meal plan parser: raw model text in, normalized [`StructuredPlan`] out.
//!
//! Parsing is a pipeline of independent stages:
//!
//! 1. [`sections`] carves the raw text into summary, shopping and recipe
//!    regions, using numbered headers when present and the header phrases
//!    otherwise.
//! 2. [`extract`] applies line-pattern extractors within each region.
//! 3. [`normalize`] deduplicates weekdays and fills in any missing ones.
//!
//! [`parse`] never fails. Missing structure degrades to placeholder values.
//!
//! # Examples
//!
//! ```rust
//! use chefbot_core::{parser, models::Weekday};
//!
//! let plan = parser::parse("Monday: Tacos\nTuesday: Soup");
//! assert_eq!(plan.summary.len(), 2);
//! assert_eq!(plan.recipes.len(), 5);
//! assert_eq!(plan.recipe(Weekday::Monday).unwrap().name, "Tacos");
//! ```

pub mod extract;
pub mod normalize;
pub mod sections;


use std::path::Path;

use log::debug;

use crate::{
    error::{RelayError, Result},
    models::StructuredPlan,
};

pub use sections::{locate_sections, SectionMode, Sections};

/// Parses raw model output into a plan with exactly one recipe per weekday.
pub fn parse(raw: &str) -> StructuredPlan {
    let (mode, regions) = locate_sections(raw);
    debug!("Parsing meal plan in {mode} mode ({} bytes)", raw.len());

    let summary = normalize::dedupe_summary(extract::extract_summary(regions.summary));
    let shopping_list = extract::extract_shopping_list(regions.shopping);
    let extracted = extract::extract_recipes(regions.recipes);
    debug!(
        "Extracted {} summary entries, {} shopping categories, {} recipe blocks",
        summary.len(),
        shopping_list.len(),
        extracted.len()
    );

    let recipes = normalize::normalize_recipes(extracted, &summary);

    StructuredPlan {
        summary,
        shopping_list,
        recipes,
    }
}

/// Reads raw model output from a file and parses it.
///
/// # Errors
///
/// Returns `RelayError::FileSystem` if the file cannot be read.
pub fn parse_file(path: &Path) -> Result<StructuredPlan> {
    let raw = std::fs::read_to_string(path).map_err(|e| RelayError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse(&raw))
}

//! Normalization of extracted plan data.
//!
//! When the model repeats a weekday, the first occurrence is canonical for
//! both the summary and the recipes.

use log::debug;

use crate::models::{MealSummary, Recipe, Weekday, DETAILS_UNAVAILABLE, MEAL_NOT_SPECIFIED};

/// Drops repeated summary days, keeping the first entry for each.
pub fn dedupe_summary(summary: Vec<MealSummary>) -> Vec<MealSummary> {
    let mut seen = Vec::with_capacity(Weekday::ALL.len());
    summary
        .into_iter()
        .filter(|entry| {
            if seen.contains(&entry.day) {
                debug!("Ignoring repeated summary entry for {}", entry.day);
                false
            } else {
                seen.push(entry.day);
                true
            }
        })
        .collect()
}

/// Produces exactly one recipe per weekday, sorted Monday→Friday.
///
/// Repeated days keep their first block. Untitled recipes take the summary
/// meal name, and recipes without instructions get the placeholder line.
/// Days with no recipe are synthesized from the summary, or marked as not
/// specified when the summary is silent too.
pub fn normalize_recipes(recipes: Vec<Recipe>, summary: &[MealSummary]) -> Vec<Recipe> {
    let summary_meal = |day: Weekday| {
        summary
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| entry.meal.as_str())
    };

    let mut normalized: Vec<Recipe> = Vec::with_capacity(Weekday::ALL.len());
    for mut recipe in recipes {
        if normalized.iter().any(|kept| kept.day == recipe.day) {
            debug!("Ignoring repeated recipe block for {}", recipe.day);
            continue;
        }
        if recipe.name.is_empty() {
            recipe.name = summary_meal(recipe.day)
                .unwrap_or(MEAL_NOT_SPECIFIED)
                .to_string();
        }
        if recipe.instructions.is_empty() {
            recipe.instructions.push(DETAILS_UNAVAILABLE.to_string());
        }
        normalized.push(recipe);
    }

    for day in Weekday::ALL {
        if normalized.iter().any(|recipe| recipe.day == day) {
            continue;
        }
        let name = summary_meal(day).unwrap_or(MEAL_NOT_SPECIFIED);
        debug!("Synthesizing {day} recipe as '{name}'");
        normalized.push(Recipe::placeholder(day, name));
    }

    normalized.sort_by_key(|recipe| recipe.day);
    normalized
}

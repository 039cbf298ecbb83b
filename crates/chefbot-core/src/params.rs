//! Parameter parsing for meal plan requests.
//!
//! Requests reach the relay in two shapes: explicit command tokens
//! (`/mealplan pref:italian avoid:nuts servings:5`) and freeform chat text
//! ("plan meals for 6 people, I prefer thai, avoid dairy"). Both are reduced
//! to a [`PlanRequest`] here so the relay and prompt builder never look at raw
//! user text. Freeform extraction is a best-effort keyword heuristic.
//!
//! Profile updates (`/remember cuisine:thai dislike:cilantro`) use the same
//! `key:value` token form.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    chef::ProfileUpdate,
    models::{Inspiration, PlanRequest},
};

/// Phrases that turn a chat message to the chef into a plan request.
pub const MEAL_PLAN_TRIGGERS: [&str; 3] = ["meal plan", "weekly plan", "plan meals"];

const PREFERENCE_KEYWORDS: [&str; 4] = ["prefer", "like", "enjoy", "want"];

const RESTRICTION_KEYWORDS: [&str; 5] = ["avoid", "allerg", "don't like", "cannot eat", "can't eat"];

static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    // Longer phrases first so "don't like" wins over "like".
    Regex::new(
        r"(?i)\b(don't like\b|cannot eat\b|can't eat\b|allerg\w*(?:\s+to\b)?|avoid\w*|prefer\w*|like\b|enjoy\w*|want\w*)",
    )
    .expect("keyword pattern is valid")
});

static SERVINGS_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s+(?:people|persons|servings|adults|of us)\b")
        .expect("servings pattern is valid")
});

/// Returns true when freeform text asks for a weekly meal plan.
pub fn is_meal_plan_trigger(text: &str) -> bool {
    let lower = text.to_lowercase();
    MEAL_PLAN_TRIGGERS.iter().any(|phrase| lower.contains(phrase))
}

/// Builds a request from `key:value` command tokens.
///
/// Recognised keys are `pref`, `avoid`, `servings`, `ingredient` and `chef`.
/// Unknown keys, empty values and servings that are not a positive integer
/// are ignored.
pub fn parse_command_tokens<S: AsRef<str>>(tokens: &[S]) -> PlanRequest {
    let mut request = PlanRequest::default();
    let mut inspiration = Inspiration::default();

    for (key, value) in key_values(tokens) {
        let value = value.as_str();
        match key.as_str() {
            "pref" => {
                request.preferences.insert(value.to_string());
            }
            "avoid" => {
                request.restrictions.insert(value.to_string());
            }
            "servings" => {
                if let Some(servings) = parse_servings(value) {
                    request.servings = servings;
                }
            }
            "ingredient" => inspiration.ingredient = Some(value.to_string()),
            "chef" => inspiration.chef = Some(value.to_string()),
            _ => {}
        }
    }

    if !inspiration.is_empty() {
        request.inspiration = Some(inspiration);
    }
    request
}

/// Extracts preferences, restrictions and a serving count from chat text.
///
/// Each keyword opens a segment that runs to the next keyword or the end of
/// the sentence; the segment is split on commas and pieces of two characters
/// or fewer are dropped, as are pieces that merely repeat a trigger phrase.
pub fn parse_freeform(text: &str) -> PlanRequest {
    let lower = text.to_lowercase();
    let mut request = PlanRequest::default();

    let matches: Vec<_> = KEYWORD.find_iter(&lower).collect();
    for (i, keyword) in matches.iter().enumerate() {
        let end = matches.get(i + 1).map_or(lower.len(), |next| next.start());
        let segment = &lower[keyword.end()..end];
        let segment = segment
            .find(|c: char| ".!?;\n".contains(c))
            .map_or(segment, |stop| &segment[..stop]);
        let target = if is_restriction(keyword.as_str()) {
            &mut request.restrictions
        } else if is_preference(keyword.as_str()) {
            &mut request.preferences
        } else {
            continue;
        };
        target.extend(split_tags(segment));
    }

    if let Some(caps) = SERVINGS_PHRASE.captures(&lower) {
        if let Some(servings) = parse_servings(&caps[1]) {
            request.servings = servings;
        }
    }

    request
}

/// Builds a chef profile update from `key:value` tokens.
///
/// Keys: `cuisine`, `diet`, `dislike`, `chef`.
pub fn parse_profile_tokens<S: AsRef<str>>(tokens: &[S]) -> ProfileUpdate {
    let mut update = ProfileUpdate::default();

    for (key, value) in key_values(tokens) {
        match key.as_str() {
            "cuisine" => update.preferred_cuisines.push(value),
            "diet" => update.dietary_restrictions.push(value),
            "dislike" => update.disliked_ingredients.push(value),
            "chef" => update.favorite_chefs.push(value),
            _ => {}
        }
    }

    update
}

/// Pairs of lowercased key and trimmed non-empty value.
///
/// Chat clients split arguments on whitespace, so a token without a colon
/// continues the value of the token before it (`chef:Jamie Oliver`). Leading
/// tokens without a key are dropped.
fn key_values<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        match token.split_once(':') {
            Some((key, value)) => {
                pairs.push((key.trim().to_lowercase(), value.trim().to_string()));
            }
            None => {
                if let Some((_, value)) = pairs.last_mut() {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(token);
                }
            }
        }
    }
    pairs.retain(|(_, value)| !value.is_empty());
    pairs
}

fn parse_servings(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn is_restriction(keyword: &str) -> bool {
    RESTRICTION_KEYWORDS.iter().any(|k| keyword.starts_with(k))
}

fn is_preference(keyword: &str) -> bool {
    PREFERENCE_KEYWORDS.iter().any(|k| keyword.starts_with(k))
}

fn split_tags(segment: &str) -> impl Iterator<Item = String> + '_ {
    segment
        .split(',')
        .map(|piece| {
            piece
                .trim()
                .trim_matches(|c: char| ".:!?".contains(c))
                .trim()
        })
        .filter(|piece| piece.chars().count() > 2 && !is_meal_plan_trigger(piece))
        .map(str::to_string)
}

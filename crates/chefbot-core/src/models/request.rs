//! Meal plan request parameters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Servings used when the request does not name a count.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Optional creative direction for the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inspiration {
    /// Ingredient to feature in at least one meal
    pub ingredient: Option<String>,

    /// Chef whose cooking style should guide the plan
    pub chef: Option<String>,
}

impl Inspiration {
    pub fn is_empty(&self) -> bool {
        self.ingredient.is_none() && self.chef.is_none()
    }
}

/// Everything the prompt builder needs to know about a plan request.
///
/// Tag sets are ordered so the rendered prompt is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanRequest {
    /// Cuisine or ingredient preferences
    pub preferences: BTreeSet<String>,

    /// Dietary restrictions and ingredients to avoid
    pub restrictions: BTreeSet<String>,

    /// Number of people to cook for (always positive)
    pub servings: u32,

    /// Optional ingredient/chef inspiration
    pub inspiration: Option<Inspiration>,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            preferences: BTreeSet::new(),
            restrictions: BTreeSet::new(),
            servings: DEFAULT_SERVINGS,
            inspiration: None,
        }
    }
}

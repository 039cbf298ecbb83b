//! Per-user chef personalization: stored tastes and recent meal history.

use serde::{Deserialize, Serialize};

use crate::models::PlanRequest;

/// Recent meals kept for repetition avoidance.
pub const MEAL_HISTORY_LIMIT: usize = 20;

/// Recent meals mentioned in the prompt.
const MEAL_HISTORY_IN_PROMPT: usize = 10;

/// Values to merge into a [`ChefProfile`].
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub dietary_restrictions: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    pub favorite_chefs: Vec<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.dietary_restrictions.is_empty()
            && self.preferred_cuisines.is_empty()
            && self.disliked_ingredients.is_empty()
            && self.favorite_chefs.is_empty()
    }
}

/// Everything the chef remembers about a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChefProfile {
    pub dietary_restrictions: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    pub favorite_chefs: Vec<String>,
    /// Most recent last, capped at [`MEAL_HISTORY_LIMIT`]
    pub recent_meals: Vec<String>,
}

impl ChefProfile {
    /// Merges list values into the profile, keeping each value once.
    pub fn save(&mut self, update: ProfileUpdate) {
        merge_unique(&mut self.dietary_restrictions, update.dietary_restrictions);
        merge_unique(&mut self.preferred_cuisines, update.preferred_cuisines);
        merge_unique(&mut self.disliked_ingredients, update.disliked_ingredients);
        merge_unique(&mut self.favorite_chefs, update.favorite_chefs);
    }

    /// Records the meals of a generated plan so the next plan avoids them.
    pub fn record_meals<I, S>(&mut self, meals: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recent_meals.extend(meals.into_iter().map(Into::into));
        if self.recent_meals.len() > MEAL_HISTORY_LIMIT {
            let excess = self.recent_meals.len() - MEAL_HISTORY_LIMIT;
            self.recent_meals.drain(..excess);
        }
    }

    /// Free-text lines describing the user's tastes, one per non-empty list.
    pub fn personalization_context(&self) -> String {
        let mut lines = Vec::new();

        if !self.dietary_restrictions.is_empty() {
            lines.push(format!(
                "Dietary restrictions: {}",
                self.dietary_restrictions.join(", ")
            ));
        }
        if !self.preferred_cuisines.is_empty() {
            lines.push(format!(
                "Preferred cuisines: {}",
                self.preferred_cuisines.join(", ")
            ));
        }
        if !self.disliked_ingredients.is_empty() {
            lines.push(format!(
                "Avoid ingredients: {}",
                self.disliked_ingredients.join(", ")
            ));
        }
        if !self.recent_meals.is_empty() {
            let start = self.recent_meals.len().saturating_sub(MEAL_HISTORY_IN_PROMPT);
            lines.push(format!(
                "Recently made meals to avoid: {}",
                self.recent_meals[start..].join(", ")
            ));
        }
        if !self.favorite_chefs.is_empty() {
            lines.push(format!(
                "Chef inspirations: {}",
                self.favorite_chefs.join(", ")
            ));
        }

        lines.join("\n")
    }

    /// Folds stored cuisines and restrictions into a request.
    pub fn merge_into(&self, mut request: PlanRequest) -> PlanRequest {
        request
            .preferences
            .extend(self.preferred_cuisines.iter().cloned());
        request
            .restrictions
            .extend(self.dietary_restrictions.iter().cloned());
        request
    }
}

fn merge_unique(target: &mut Vec<String>, values: Vec<String>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

/// A renowned chef suggested as plan inspiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChefInspiration {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub specialty: &'static str,
}

static INSPIRATIONS: [ChefInspiration; 8] = [
    ChefInspiration {
        name: "Jamie Oliver",
        cuisine: "Mediterranean, British",
        specialty: "Fresh, simple meals",
    },
    ChefInspiration {
        name: "Ottolenghi",
        cuisine: "Middle Eastern, Vegetarian",
        specialty: "Vegetable-forward, spice-rich dishes",
    },
    ChefInspiration {
        name: "Rick Stein",
        cuisine: "Seafood, International",
        specialty: "Coastal and international cuisines",
    },
    ChefInspiration {
        name: "Massimo Bottura",
        cuisine: "Italian",
        specialty: "Modern, innovative Italian",
    },
    ChefInspiration {
        name: "David Chang",
        cuisine: "Asian Fusion",
        specialty: "Modern Asian cuisine",
    },
    ChefInspiration {
        name: "Dominique Crenn",
        cuisine: "French",
        specialty: "Artistic, progressive French",
    },
    ChefInspiration {
        name: "Yotam Ottolenghi",
        cuisine: "Middle Eastern, Vegetarian",
        specialty: "Vegetable-centric, spice-driven",
    },
    ChefInspiration {
        name: "Gordon Ramsay",
        cuisine: "Modern European",
        specialty: "Classic techniques, bold flavors",
    },
];

/// Chefs a user can pick as inspiration for a plan.
pub fn chef_inspirations() -> &'static [ChefInspiration] {
    &INSPIRATIONS
}

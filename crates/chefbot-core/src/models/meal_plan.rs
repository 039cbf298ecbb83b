//! Structured meal plan records produced by the parser.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Weekday;

/// Instruction line used when a recipe's steps could not be extracted.
pub const DETAILS_UNAVAILABLE: &str = "Recipe details not available";

/// Recipe name used when neither the recipes nor the summary name a day's meal.
pub const MEAL_NOT_SPECIFIED: &str = "Meal not specified";

/// Category name → ordered item list. Iteration order is the order in which
/// categories were first encountered.
pub type ShoppingList = IndexMap<String, Vec<String>>;

/// One line of the weekly summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSummary {
    pub day: Weekday,
    pub meal: String,
}

impl MealSummary {
    pub fn new(day: Weekday, meal: impl Into<String>) -> Self {
        Self {
            day,
            meal: meal.into(),
        }
    }
}

/// A single day's recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Day the recipe is planned for
    pub day: Weekday,

    /// Recipe title
    pub name: String,

    /// Preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,

    /// Cooking time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,

    /// Number of servings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    /// Ingredient lines, bullets stripped
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Instruction steps, numbering stripped
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Creates an empty recipe for the given day.
    pub fn new(day: Weekday, name: impl Into<String>) -> Self {
        Self {
            day,
            name: name.into(),
            prep_time: None,
            cook_time: None,
            servings: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Creates the stand-in recipe for a day the model left out.
    ///
    /// Timings and servings are zero, which the formatter treats as absent.
    pub fn placeholder(day: Weekday, name: impl Into<String>) -> Self {
        Self {
            day,
            name: name.into(),
            prep_time: Some(0),
            cook_time: Some(0),
            servings: Some(0),
            ingredients: Vec::new(),
            instructions: vec![DETAILS_UNAVAILABLE.to_string()],
        }
    }

    /// Returns true when the recipe carries no extracted details.
    pub fn is_placeholder(&self) -> bool {
        self.ingredients.is_empty()
            && self.instructions.len() == 1
            && self.instructions[0] == DETAILS_UNAVAILABLE
    }
}

/// The parsed, normalized weekly plan.
///
/// After parsing, `recipes` always holds exactly one entry per weekday in
/// Monday→Friday order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredPlan {
    pub summary: Vec<MealSummary>,
    pub shopping_list: ShoppingList,
    pub recipes: Vec<Recipe>,
}

impl StructuredPlan {
    /// Looks up the summary meal for a day (first entry wins).
    pub fn summary_meal(&self, day: Weekday) -> Option<&str> {
        self.summary
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| entry.meal.as_str())
    }

    /// Looks up the recipe for a day.
    pub fn recipe(&self, day: Weekday) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.day == day)
    }

    /// Names of the recipes that were actually planned, skipping stand-ins
    /// for days the model never mentioned.
    pub fn planned_meal_names(&self) -> Vec<String> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.name != MEAL_NOT_SPECIFIED && !recipe.name.is_empty())
            .map(|recipe| recipe.name.clone())
            .collect()
    }
}

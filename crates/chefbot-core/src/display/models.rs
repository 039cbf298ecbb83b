//! Display implementations for meal plan records.
//!
//! Recipes render in the same shape the prompt asks the model for, so
//! formatted output can be parsed again.

use std::fmt;

use crate::models::{MealSummary, Recipe};

impl fmt::Display for MealSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day, self.meal)
    }
}

impl Recipe {
    /// Timing and serving lines for the values that are present.
    fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(minutes) = self.prep_time {
            writeln!(f, "Preparation Time: {minutes} minutes")?;
        }
        if let Some(minutes) = self.cook_time {
            writeln!(f, "Cooking Time: {minutes} minutes")?;
        }
        if let Some(servings) = self.servings {
            writeln!(f, "Servings: {servings}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}: {}", self.day, self.name)?;
        self.fmt_metadata(f)?;
        writeln!(f)?;

        if !self.ingredients.is_empty() {
            writeln!(f, "### Ingredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "- {ingredient}")?;
            }
            writeln!(f)?;
        }

        if !self.instructions.is_empty() {
            writeln!(f, "### Instructions:")?;
            for (i, step) in self.instructions.iter().enumerate() {
                writeln!(f, "{}. {step}", i + 1)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_summary_line() {
        let entry = MealSummary::new(Weekday::Thursday, "Risotto");
        assert_eq!(entry.to_string(), "Thursday: Risotto");
    }

    #[test]
    fn test_full_recipe() {
        let recipe = Recipe {
            prep_time: Some(15),
            cook_time: Some(20),
            servings: Some(4),
            ingredients: vec!["1 lb beef".to_string(), "8 tortillas".to_string()],
            instructions: vec!["Brown the beef.".to_string(), "Fill.".to_string()],
            ..Recipe::new(Weekday::Monday, "Beef Tacos")
        };
        assert_eq!(
            recipe.to_string(),
            "## Monday: Beef Tacos\n\
             Preparation Time: 15 minutes\n\
             Cooking Time: 20 minutes\n\
             Servings: 4\n\
             \n\
             ### Ingredients:\n\
             - 1 lb beef\n\
             - 8 tortillas\n\
             \n\
             ### Instructions:\n\
             1. Brown the beef.\n\
             2. Fill.\n\
             \n"
        );
    }

    #[test]
    fn test_placeholder_recipe_keeps_zero_fields() {
        let output = Recipe::placeholder(Weekday::Wednesday, "Meal not specified").to_string();
        assert_eq!(
            output,
            "## Wednesday: Meal not specified\n\
             Preparation Time: 0 minutes\n\
             Cooking Time: 0 minutes\n\
             Servings: 0\n\
             \n\
             ### Instructions:\n\
             1. Recipe details not available\n\
             \n"
        );
    }

    #[test]
    fn test_missing_fields_are_left_out() {
        let recipe = Recipe {
            cook_time: Some(0),
            instructions: vec!["Serve cold.".to_string()],
            ..Recipe::new(Weekday::Friday, "Gazpacho")
        };
        assert_eq!(
            recipe.to_string(),
            "## Friday: Gazpacho\nCooking Time: 0 minutes\n\n### Instructions:\n1. Serve cold.\n\n"
        );
    }
}

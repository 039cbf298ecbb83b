//! Meal plan prompt construction.
//!
//! The prompt ends with a literal response template. The model is asked to
//! follow it, and [`crate::parser`] relies on its section headers, but nothing
//! guarantees the model complies, so the parser tolerates any deviation.

use std::fmt;

use crate::models::{PlanRequest, SeasonContext, Weekday};

/// Section headers the model is asked to emit, in order.
pub const SECTION_HEADERS: [&str; 3] = [
    "MEAL PLAN SUMMARY",
    "SHOPPING LIST",
    "DETAILED RECIPES",
];

/// Shopping list categories suggested in the template.
const TEMPLATE_CATEGORIES: [&str; 5] = ["Produce", "Proteins", "Dairy", "Pantry", "Other"];

/// Seasonal ingredients named in the prompt.
const FEATURED_INGREDIENTS: usize = 5;

const GENERAL_REQUIREMENTS: &str = "GENERAL REQUIREMENTS:
- 5 unique, diverse dinner recipes, Monday to Friday
- Maximum 40 minutes preparation time per meal
- Avoid recently made meals and cuisines
- Incorporate seasonal ingredients
- Meet dietary needs and preferences
";

/// Builds the meal plan prompt for the current season.
pub fn build_prompt(request: &PlanRequest, personalization_context: &str) -> String {
    build_prompt_for_season(request, personalization_context, SeasonContext::current())
}

/// Builds the meal plan prompt for an explicit season.
pub fn build_prompt_for_season(
    request: &PlanRequest,
    personalization_context: &str,
    season: SeasonContext,
) -> String {
    MealPlanPrompt {
        request,
        personalization: personalization_context.trim(),
        season,
    }
    .to_string()
}

/// Renders the prompt for one request.
struct MealPlanPrompt<'a> {
    request: &'a PlanRequest,
    personalization: &'a str,
    season: SeasonContext,
}

impl MealPlanPrompt<'_> {
    /// Preferences, restrictions and inspiration. The whole block is left out
    /// when there is nothing to ask for.
    fn fmt_requests(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.request;
        let inspiration = request.inspiration.as_ref();
        let ingredient = inspiration.and_then(|i| i.ingredient.as_deref());
        let chef = inspiration.and_then(|i| i.chef.as_deref());
        if request.preferences.is_empty()
            && request.restrictions.is_empty()
            && ingredient.is_none()
            && chef.is_none()
        {
            return Ok(());
        }

        writeln!(f, "ADDITIONAL REQUESTS:")?;
        if !request.preferences.is_empty() {
            writeln!(f, "Preferences: {}", joined(&request.preferences))?;
        }
        if !request.restrictions.is_empty() {
            writeln!(f, "Restrictions to respect: {}", joined(&request.restrictions))?;
        }
        if let Some(ingredient) = ingredient {
            writeln!(f, "Incorporate {ingredient} into at least one meal.")?;
        }
        if let Some(chef) = chef {
            writeln!(f, "Draw inspiration from {chef}'s cooking style.")?;
        }
        writeln!(f)
    }

    /// The literal structure the model must fill in.
    fn fmt_template(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FORMAT YOUR RESPONSE EXACTLY AS FOLLOWS:\n")?;

        writeln!(f, "# 1. {}", SECTION_HEADERS[0])?;
        for day in Weekday::ALL {
            writeln!(f, "{day}: [Meal name]")?;
        }
        writeln!(f)?;

        writeln!(f, "# 2. {}", SECTION_HEADERS[1])?;
        for category in TEMPLATE_CATEGORIES {
            writeln!(f, "## {category}\n- [Item with quantity]")?;
        }
        writeln!(f)?;

        writeln!(f, "# 3. {}", SECTION_HEADERS[2])?;
        for day in Weekday::ALL {
            writeln!(f, "## {day}: [Meal name]")?;
            writeln!(f, "Preparation Time: [X] minutes")?;
            writeln!(f, "Cooking Time: [X] minutes")?;
            writeln!(f, "Servings: {}\n", self.request.servings)?;
            writeln!(f, "### Ingredients:\n- [Ingredient with quantity]\n")?;
            writeln!(f, "### Instructions:\n1. [Step]\n2. [Step]\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for MealPlanPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Create a highly personalized 5-day weekday dinner plan for {} people.\n",
            self.request.servings
        )?;

        if !self.personalization.is_empty() {
            writeln!(f, "PERSONALIZATION CONTEXT:\n{}\n", self.personalization)?;
        }
        self.fmt_requests(f)?;

        writeln!(f, "SEASONAL CONSIDERATIONS:")?;
        writeln!(f, "Current season: {}", self.season.season)?;
        writeln!(
            f,
            "Seasonal ingredients to feature: {}\n",
            self.season.featured(FEATURED_INGREDIENTS).join(", ")
        )?;

        writeln!(f, "{GENERAL_REQUIREMENTS}")?;
        self.fmt_template(f)
    }
}

fn joined<'a>(tags: impl IntoIterator<Item = &'a String>) -> String {
    tags.into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Inspiration;

    fn fall() -> SeasonContext {
        SeasonContext::for_month(10)
    }

    #[test]
    fn test_template_headers_in_order() {
        let prompt = build_prompt_for_season(&PlanRequest::default(), "", fall());
        let summary = prompt.find("# 1. MEAL PLAN SUMMARY").unwrap();
        let shopping = prompt.find("# 2. SHOPPING LIST").unwrap();
        let recipes = prompt.find("# 3. DETAILED RECIPES").unwrap();
        assert!(summary < shopping && shopping < recipes);
    }

    #[test]
    fn test_template_has_every_weekday() {
        let prompt = build_prompt_for_season(&PlanRequest::default(), "", fall());
        for day in Weekday::ALL {
            assert!(prompt.contains(&format!("\n{day}: [Meal name]")));
            assert!(prompt.contains(&format!("## {day}: [Meal name]")));
        }
        assert_eq!(prompt.matches("### Ingredients:").count(), 5);
        assert_eq!(prompt.matches("### Instructions:").count(), 5);
        assert_eq!(prompt.matches("Preparation Time:").count(), 5);
        assert_eq!(prompt.matches("Cooking Time:").count(), 5);
        assert_eq!(prompt.matches("Servings: 4").count(), 5);
    }

    #[test]
    fn test_season_and_first_five_ingredients() {
        let prompt = build_prompt_for_season(&PlanRequest::default(), "", fall());
        assert!(prompt.contains("Current season: Fall"));
        assert!(prompt.contains(
            "Seasonal ingredients to feature: butternut squash, pumpkin, sweet potatoes, apples, brussels sprouts\n"
        ));
        assert!(!prompt.contains("cauliflower"));
    }

    #[test]
    fn test_blocks_are_separated_by_blank_lines() {
        let prompt = build_prompt_for_season(&PlanRequest::default(), "", fall());
        assert!(prompt.starts_with(
            "Create a highly personalized 5-day weekday dinner plan for 4 people.\n\nSEASONAL CONSIDERATIONS:\n"
        ));
        assert!(prompt.contains(
            "preferences\n\nFORMAT YOUR RESPONSE EXACTLY AS FOLLOWS:\n\n# 1. MEAL PLAN SUMMARY\nMonday: [Meal name]\n"
        ));
        assert!(prompt.contains("Friday: [Meal name]\n\n# 2. SHOPPING LIST\n## Produce\n- [Item with quantity]\n"));
        assert!(prompt.contains("- [Item with quantity]\n\n# 3. DETAILED RECIPES\n## Monday: [Meal name]\n"));
        assert!(prompt.contains(
            "Servings: 4\n\n### Ingredients:\n- [Ingredient with quantity]\n\n### Instructions:\n1. [Step]\n2. [Step]\n\n## Tuesday"
        ));
        assert!(prompt.ends_with("2. [Step]\n\n"));
    }

    #[test]
    fn test_requests_block_ends_with_blank_line() {
        let mut request = PlanRequest::default();
        request.restrictions.insert("nuts".to_string());
        let prompt = build_prompt_for_season(&request, "Preferred cuisines: thai", fall());
        assert!(prompt.contains(
            "PERSONALIZATION CONTEXT:\nPreferred cuisines: thai\n\nADDITIONAL REQUESTS:\nRestrictions to respect: nuts\n\nSEASONAL CONSIDERATIONS:"
        ));
    }

    #[test]
    fn test_empty_blocks_are_omitted() {
        let prompt = build_prompt_for_season(&PlanRequest::default(), "  ", fall());
        assert!(!prompt.contains("PERSONALIZATION CONTEXT"));
        assert!(!prompt.contains("ADDITIONAL REQUESTS"));
        assert!(!prompt.contains("Preferences:"));
    }

    #[test]
    fn test_requests_and_personalization_rendered() {
        let mut request = PlanRequest {
            servings: 6,
            inspiration: Some(Inspiration {
                ingredient: Some("chickpeas".to_string()),
                chef: Some("Ottolenghi".to_string()),
            }),
            ..Default::default()
        };
        request.preferences.insert("thai".to_string());
        request.preferences.insert("italian".to_string());
        request.restrictions.insert("nuts".to_string());

        let prompt = build_prompt_for_season(&request, "Dietary restrictions: dairy", fall());
        assert!(prompt.contains("for 6 people"));
        assert!(prompt.contains("PERSONALIZATION CONTEXT:\nDietary restrictions: dairy\n"));
        assert!(prompt.contains("Preferences: italian, thai\n"));
        assert!(prompt.contains("Restrictions to respect: nuts\n"));
        assert!(prompt.contains("Incorporate chickpeas into at least one meal."));
        assert!(prompt.contains("Draw inspiration from Ottolenghi's cooking style."));
        assert_eq!(prompt.matches("Servings: 6").count(), 5);
    }
}

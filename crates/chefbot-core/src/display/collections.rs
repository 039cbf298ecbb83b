//! Wrapper types for displaying the summary and shopping list.
//!
//! Both wrappers borrow from a [`StructuredPlan`] and print a placeholder
//! line when their collection is empty.

use std::fmt;

use crate::models::{MealSummary, ShoppingList, StructuredPlan};
use crate::prompt::SECTION_HEADERS;

/// Shown in place of an empty summary.
pub const NO_SUMMARY: &str = "No meal summary available.";

/// Shown in place of an empty shopping list.
pub const NO_SHOPPING_LIST: &str = "No shopping list available.";

/// Summary entries as `Day: meal` lines.
pub struct MealSummaries<'a>(pub &'a [MealSummary]);

impl fmt::Display for MealSummaries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{NO_SUMMARY}");
        }
        for entry in self.0 {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Shopping list as `## Category` headers with `- item` lines, in the order
/// categories were first seen.
pub struct ShoppingItems<'a>(pub &'a ShoppingList);

impl fmt::Display for ShoppingItems<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{NO_SHOPPING_LIST}");
        }
        for (i, (category, items)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "## {category}")?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
        }
        Ok(())
    }
}

/// First message of a formatted plan: numbered summary and shopping list
/// sections.
///
/// # Examples
///
/// ```rust
/// use chefbot_core::{display::PlanOverview, models::StructuredPlan};
///
/// let plan = StructuredPlan::default();
/// let output = PlanOverview(&plan).to_string();
/// assert!(output.starts_with("# 1. MEAL PLAN SUMMARY"));
/// assert!(output.contains("No shopping list available."));
/// ```
pub struct PlanOverview<'a>(pub &'a StructuredPlan);

impl fmt::Display for PlanOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# 1. {}", SECTION_HEADERS[0])?;
        writeln!(f)?;
        write!(f, "{}", MealSummaries(&self.0.summary))?;
        writeln!(f)?;
        writeln!(f, "# 2. {}", SECTION_HEADERS[1])?;
        writeln!(f)?;
        write!(f, "{}", ShoppingItems(&self.0.shopping_list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_empty_placeholders() {
        assert_eq!(MealSummaries(&[]).to_string(), "No meal summary available.\n");
        assert_eq!(
            ShoppingItems(&ShoppingList::new()).to_string(),
            "No shopping list available.\n"
        );
    }

    #[test]
    fn test_shopping_items_keep_insertion_order() {
        let mut list = ShoppingList::new();
        list.insert("Produce".to_string(), vec!["onion".to_string()]);
        list.insert("Dairy".to_string(), vec!["milk".to_string(), "butter".to_string()]);
        assert_eq!(
            ShoppingItems(&list).to_string(),
            "## Produce\n- onion\n\n## Dairy\n- milk\n- butter\n"
        );
    }

    #[test]
    fn test_overview_sections() {
        let plan = StructuredPlan {
            summary: vec![
                MealSummary::new(Weekday::Monday, "Tacos"),
                MealSummary::new(Weekday::Tuesday, "Soup"),
            ],
            ..Default::default()
        };
        assert_eq!(
            PlanOverview(&plan).to_string(),
            "# 1. MEAL PLAN SUMMARY\n\nMonday: Tacos\nTuesday: Soup\n\n# 2. SHOPPING LIST\n\nNo shopping list available.\n"
        );
    }
}

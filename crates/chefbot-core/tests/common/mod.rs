use std::fmt::Write as _;

use chefbot_core::{MealSummary, Recipe, ShoppingList, StructuredPlan, Weekday};

/// Helper function to build a fully populated plan
pub fn sample_plan() -> StructuredPlan {
    let meals = [
        "Beef Tacos",
        "Lentil Soup",
        "Pumpkin Risotto",
        "Chicken Curry",
        "Baked Cod",
    ];

    let mut shopping_list = ShoppingList::new();
    shopping_list.insert(
        "Produce".to_string(),
        vec!["2 onions".to_string(), "1 small pumpkin".to_string()],
    );
    shopping_list.insert(
        "Proteins".to_string(),
        vec!["1 lb ground beef".to_string(), "4 cod fillets".to_string()],
    );
    shopping_list.insert("Pantry".to_string(), vec!["1 cup red lentils".to_string()]);

    let recipes = Weekday::ALL
        .iter()
        .zip(meals)
        .enumerate()
        .map(|(i, (&day, meal))| Recipe {
            prep_time: Some(10 + i as u32),
            cook_time: Some(20 + i as u32),
            servings: Some(4),
            ingredients: vec![format!("ingredient {i}a"), format!("ingredient {i}b")],
            instructions: vec![
                format!("Prepare the {meal}."),
                "Cook until done.".to_string(),
                "Serve warm.".to_string(),
            ],
            ..Recipe::new(day, meal)
        })
        .collect();

    StructuredPlan {
        summary: Weekday::ALL
            .iter()
            .zip(meals)
            .map(|(&day, meal)| MealSummary::new(day, meal))
            .collect(),
        shopping_list,
        recipes,
    }
}

/// Renders a plan the way the prompt template asks the model to answer
pub fn render_as_model_reply(plan: &StructuredPlan) -> String {
    let mut raw = String::from("Here is your personalized plan!\n\n# 1. MEAL PLAN SUMMARY\n");
    for entry in &plan.summary {
        let _ = writeln!(raw, "{}: {}", entry.day, entry.meal);
    }

    raw.push_str("\n# 2. SHOPPING LIST\n");
    for (category, items) in &plan.shopping_list {
        let _ = writeln!(raw, "## {category}");
        for item in items {
            let _ = writeln!(raw, "- {item}");
        }
        raw.push('\n');
    }

    raw.push_str("# 3. DETAILED RECIPES\n");
    for recipe in &plan.recipes {
        let _ = writeln!(raw, "## {}: {}", recipe.day, recipe.name);
        if let Some(prep) = recipe.prep_time {
            let _ = writeln!(raw, "Preparation Time: {prep} minutes");
        }
        if let Some(cook) = recipe.cook_time {
            let _ = writeln!(raw, "Cooking Time: {cook} minutes");
        }
        if let Some(servings) = recipe.servings {
            let _ = writeln!(raw, "Servings: {servings}");
        }
        raw.push_str("\n### Ingredients:\n");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(raw, "- {ingredient}");
        }
        raw.push_str("\n### Instructions:\n");
        for (i, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(raw, "{}. {step}", i + 1);
        }
        raw.push('\n');
    }

    raw.push_str("Enjoy your meals this week!\n");
    raw
}

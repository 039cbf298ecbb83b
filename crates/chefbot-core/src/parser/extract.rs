//! Field extractors that run inside a single section region.
//!
//! Every extractor is total: lines that do not match are skipped and fields
//! that are never found stay empty.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::{MealSummary, Recipe, ShoppingList, Weekday};

static SUMMARY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t>*•-]*\**(\w+day)\**[ \t]*:\**[ \t]*(.+?)[ \t]*$")
        .expect("summary pattern is valid")
});

static RECIPE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*#{2,3}[ \t]*\**(\w+day)\**[ \t]*:\**[ \t]*(.*?)[ \t]*$")
        .expect("recipe marker pattern is valid")
});

static PREP_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prep(?:aration)?[ \t]+time[ \t*]*:[ \t*]*(\d+)").expect("prep pattern is valid")
});

static COOK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cook(?:ing)?[ \t]+time[ \t*]*:[ \t*]*(\d+)").expect("cook pattern is valid")
});

static SERVINGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)servings[ \t*]*:[ \t*]*(\d+)").expect("servings pattern is valid")
});

static INGREDIENTS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*#{0,4}[ \t]*\**ingredients\**[ \t]*:?[ \t]*\**[ \t]*$")
        .expect("ingredients header pattern is valid")
});

static INSTRUCTIONS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*#{0,4}[ \t]*\**instructions\**[ \t]*:?[ \t]*\**[ \t]*$")
        .expect("instructions header pattern is valid")
});

static SUB_BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*(?:#|\**(?:ingredients|instructions|notes|tips)\**[ \t]*:)")
        .expect("sub-block end pattern is valid")
});

static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+[.)][ \t]*(.+?)\s*$").expect("numbered line pattern is valid")
});

/// Extracts `Day: meal` lines in order of appearance.
///
/// Lines naming something other than Monday–Friday are skipped. Repeated days
/// are kept; deduplication happens during normalization.
pub fn extract_summary(region: &str) -> Vec<MealSummary> {
    SUMMARY_LINE
        .captures_iter(region)
        .filter_map(|caps| {
            let day = caps[1].parse::<Weekday>().ok()?;
            let meal = clean_title(&caps[2]);
            (!meal.is_empty()).then(|| MealSummary::new(day, meal))
        })
        .collect()
}

/// Extracts `## Category` blocks followed by bulleted items.
///
/// Blank lines inside a block are tolerated; any other non-bullet line ends
/// it. A category is only added once it has at least one item, and repeated
/// categories accumulate into the first.
pub fn extract_shopping_list(region: &str) -> ShoppingList {
    let mut list = ShoppingList::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in region.lines() {
        let trimmed = line.trim();
        if let Some(category) = category_header(trimmed) {
            flush_category(&mut list, current.take());
            current = Some((category, Vec::new()));
        } else if let Some(item) = bullet_item(trimmed) {
            if let Some((_, items)) = current.as_mut() {
                items.push(item.to_string());
            }
        } else if !trimmed.is_empty() {
            flush_category(&mut list, current.take());
        }
    }
    flush_category(&mut list, current);

    list
}

/// Extracts one recipe per `## Day: Title` marker.
///
/// Blocks run from one marker to the next. Markers for days outside
/// Monday–Friday still end the previous block but produce no recipe.
pub fn extract_recipes(region: &str) -> Vec<Recipe> {
    let markers: Vec<_> = RECIPE_MARKER.captures_iter(region).collect();
    let mut recipes = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let Some(header) = caps.get(0) else {
            continue;
        };
        let body_end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(region.len(), |m| m.start());

        let Ok(day) = caps[1].parse::<Weekday>() else {
            debug!("Skipping recipe block for '{}'", &caps[1]);
            continue;
        };
        recipes.push(extract_recipe(day, &caps[2], &region[header.end()..body_end]));
    }

    recipes
}

/// Builds a recipe from its title and the text under its marker.
pub fn extract_recipe(day: Weekday, title: &str, body: &str) -> Recipe {
    let mut recipe = Recipe::new(day, clean_title(title));
    recipe.prep_time = capture_number(&PREP_TIME, body);
    recipe.cook_time = capture_number(&COOK_TIME, body);
    recipe.servings = capture_number(&SERVINGS, body);

    if let Some(block) = sub_block(&INGREDIENTS_HEADER, body) {
        recipe.ingredients = block
            .lines()
            .filter_map(|line| bullet_item(line.trim()))
            .map(str::to_string)
            .collect();
    }

    if let Some(block) = sub_block(&INSTRUCTIONS_HEADER, body) {
        let numbered: Vec<String> = block
            .lines()
            .filter_map(|line| NUMBERED_LINE.captures(line))
            .map(|caps| caps[1].to_string())
            .collect();
        recipe.instructions = if numbered.is_empty() {
            block
                .lines()
                .filter_map(|line| bullet_item(line.trim()))
                .map(str::to_string)
                .collect()
        } else {
            numbered
        };
    }

    recipe
}

/// Text between a sub-header and the next heading or label line (or the end).
fn sub_block<'a>(header: &Regex, body: &'a str) -> Option<&'a str> {
    let start = header.find(body)?.end();
    let rest = &body[start..];
    let end = SUB_BLOCK_END.find(rest).map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

fn capture_number(pattern: &Regex, text: &str) -> Option<u32> {
    pattern.captures(text)?[1].parse().ok()
}

/// Category name from a `##` line, without trailing colons or emphasis.
fn category_header(line: &str) -> Option<String> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes < 2 {
        return None;
    }
    let name = clean_title(line[hashes..].trim().trim_end_matches(':'));
    (!name.is_empty()).then_some(name)
}

/// Item text from a line starting with `-`, `•` or `* `. Rules such as
/// `---` are not bullets.
fn bullet_item(line: &str) -> Option<&str> {
    let rest = if let Some(rest) = line.strip_prefix('-').filter(|rest| !rest.starts_with('-')) {
        rest
    } else if let Some(rest) = line.strip_prefix('•') {
        rest
    } else {
        line.strip_prefix("* ")?
    };
    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}

fn flush_category(list: &mut ShoppingList, block: Option<(String, Vec<String>)>) {
    if let Some((category, items)) = block {
        if !items.is_empty() {
            list.entry(category).or_default().extend(items);
        }
    }
}

/// Trims whitespace and markdown emphasis from a title.
fn clean_title(title: &str) -> String {
    title.trim().trim_matches('*').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let region = "MEAL PLAN SUMMARY\nMonday: Tacos\n- **Tuesday:** Lentil Soup\n  Wednesday : Pasta  \nSaturday: Pizza\nToday: nothing\n";
        let summary = extract_summary(region);
        assert_eq!(
            summary,
            vec![
                MealSummary::new(Weekday::Monday, "Tacos"),
                MealSummary::new(Weekday::Tuesday, "Lentil Soup"),
                MealSummary::new(Weekday::Wednesday, "Pasta"),
            ]
        );
    }

    #[test]
    fn test_summary_keeps_duplicates() {
        let summary = extract_summary("Monday: Tacos\nMonday: Burritos\n");
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_shopping_blocks() {
        let region = "SHOPPING LIST\n## Produce\n- 2 onions\n• 1 lemon\n\n* basil\n## Empty\n## Dairy:\n- milk\nSome closing prose.\n- stray bullet\n";
        let list = extract_shopping_list(region);
        let categories: Vec<_> = list.keys().cloned().collect();
        assert_eq!(categories, vec!["Produce", "Dairy"]);
        assert_eq!(list["Produce"], vec!["2 onions", "1 lemon", "basil"]);
        assert_eq!(list["Dairy"], vec!["milk"]);
    }

    #[test]
    fn test_shopping_repeated_category_accumulates() {
        let list = extract_shopping_list("## Produce\n- onion\n## Dairy\n- milk\n## Produce\n- leek\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list["Produce"], vec!["onion", "leek"]);
    }

    #[test]
    fn test_recipe_fields() {
        let body = "\nPreparation Time: 15 minutes\nCooking Time: 25 minutes\nServings: 4\n\n### Ingredients:\n- 1 lb beef\n- 8 tortillas\n\n### Instructions:\n1. Brown the beef.\n2) Warm the tortillas.\n";
        let recipe = extract_recipe(Weekday::Monday, " **Beef Tacos** ", body);
        assert_eq!(recipe.name, "Beef Tacos");
        assert_eq!(recipe.prep_time, Some(15));
        assert_eq!(recipe.cook_time, Some(25));
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.ingredients, vec!["1 lb beef", "8 tortillas"]);
        assert_eq!(recipe.instructions, vec!["Brown the beef.", "Warm the tortillas."]);
    }

    #[test]
    fn test_recipe_missing_fields_stay_empty() {
        let recipe = extract_recipe(Weekday::Friday, "Mystery", "Just cook something nice.\n");
        assert_eq!(recipe.prep_time, None);
        assert_eq!(recipe.cook_time, None);
        assert_eq!(recipe.servings, None);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_recipe_bold_labels() {
        let body = "**Prep Time:** 10 min\n**Cook Time:** 20 min\n**Servings:** 2\n**Ingredients:**\n- rice\n**Instructions:**\n- Cook the rice\n";
        let recipe = extract_recipe(Weekday::Tuesday, "Rice", body);
        assert_eq!(recipe.prep_time, Some(10));
        assert_eq!(recipe.cook_time, Some(20));
        assert_eq!(recipe.servings, Some(2));
        assert_eq!(recipe.ingredients, vec!["rice"]);
        assert_eq!(recipe.instructions, vec!["Cook the rice"]);
    }

    #[test]
    fn test_recipe_blocks_delimited_by_markers() {
        let region = "DETAILED RECIPES\n## Monday: Tacos\n### Ingredients:\n- beef\n## Saturday: Pizza\n### Ingredients:\n- dough\n## Tuesday: Soup\n### Ingredients:\n- lentils\n";
        let recipes = extract_recipes(region);
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].day, Weekday::Monday);
        assert_eq!(recipes[0].ingredients, vec!["beef"]);
        assert_eq!(recipes[1].day, Weekday::Tuesday);
        assert_eq!(recipes[1].ingredients, vec!["lentils"]);
    }
}

use std::collections::HashSet;

use crate::catalog::IndexCatalog;
use crate::interface::export::{score_rows, SCORE_HEADERS};
use crate::models::{Food, ScoreCard};
use crate::scoring::{ComponentSummary, FoodMatch};

/// Report how a query was resolved.
pub fn display_match(query: &str, found: Option<&FoodMatch<'_>>) {
    match found {
        Some(m) if m.is_exact() => println!("Exact match found: {}", m.name),
        Some(m) => println!(
            "Found closest match: {} (confidence: {:.1}%)",
            m.name, m.confidence
        ),
        None => println!(
            "No close match found for '{}'. Please try a different food name.",
            query
        ),
    }
}

/// Display serving information and the primary ingredient table.
pub fn display_food(food: &Food) {
    println!();
    println!("=== Food Information: {} ===", food.name);
    println!("Serving size:   {}", food.serving_size);
    println!("Total calories: {} kcal", food.total_calories);
    println!();

    if food.primary_ingredients.is_empty() {
        println!("Primary ingredients: (none)");
        return;
    }

    let name_width = food
        .primary_ingredients
        .keys()
        .map(|n| n.len())
        .max()
        .unwrap_or(10)
        .max("Ingredient".len());

    println!("Primary ingredients:");
    println!(
        "  {:<width$}  {:<14}  {:<24}  {:>8}",
        "Ingredient",
        "Quantity",
        "Category",
        "Calories",
        width = name_width
    );
    for ingredient in food.primary_ingredients.values() {
        println!(
            "  {:<width$}  {:<14}  {:<24}  {:>4} kcal",
            ingredient.name,
            ingredient.quantity_per_serving,
            ingredient.category,
            ingredient.calories,
            width = name_width
        );
    }

    if food.optional_ingredients.is_empty() {
        println!();
        println!("No optional ingredients available for this food.");
    }
}

/// Display the ranked results table.
pub fn display_scores(card: &ScoreCard, selected_optional: &HashSet<String>) {
    println!();
    println!("=== Dietary Scores ===");

    if !selected_optional.is_empty() {
        let mut selected: Vec<&str> = selected_optional.iter().map(String::as_str).collect();
        selected.sort_unstable();
        println!("Selected optional ingredients: {}", selected.join(", "));
    }
    println!();

    let rows = score_rows(card);
    let width = rows
        .iter()
        .map(|r| r.index.len())
        .max()
        .unwrap_or(10)
        .max(SCORE_HEADERS[0].len());

    println!(
        "{:<width$}  {:>7}  {:>10}  {:>18}",
        SCORE_HEADERS[0],
        SCORE_HEADERS[1],
        SCORE_HEADERS[2],
        SCORE_HEADERS[3],
        width = width
    );
    for row in &rows {
        println!(
            "{:<width$}  {:>7}  {:>10}  {:>18}",
            row.index,
            row.score,
            row.percentage,
            row.matched,
            width = width
        );
    }

    println!();
    println!("Note: scores reflect which ingredient categories are present, not nutrient quantities.");
}

/// Display one explanation block per index, in ranked order.
pub fn display_explanations(sections: &[(String, String)]) {
    println!();
    println!("=== Detailed Health Assessment ===");
    for (index, text) in sections {
        println!();
        println!("## {}", index);
        println!("{}", text);
        println!("---");
    }
}

/// Display beneficial and concerning categories of the scored food.
pub fn display_summary(summary: &ComponentSummary) {
    println!();
    println!("=== Summary of Your Food's Components ===");

    if !summary.beneficial.is_empty() {
        println!("Beneficial components in your food:");
        for item in &summary.beneficial {
            println!("  • {} - {}", item.label, item.rationale);
        }
    }

    if !summary.concerning.is_empty() {
        println!("Components to be mindful of:");
        for item in &summary.concerning {
            println!("  • {} - {}", item.label, item.rationale);
        }
    }
    println!();
}

/// List the loaded dietary indices.
pub fn display_indices(indices: &IndexCatalog) {
    println!();
    println!("=== Dietary Indices ({}) ===", indices.len());
    println!();
    for index in indices.iter() {
        println!(
            "  {} (max {}, {} components)",
            index.name(),
            index.max_score(),
            index.component_count()
        );
        println!("    {}", index.description());
    }
    println!();
}

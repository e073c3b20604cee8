use std::collections::HashSet;

use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{DietError, Result};
use crate::models::Food;

/// Prompt for a food name to search for, asking again while the answer is blank.
pub fn prompt_food_query() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter food name (e.g. Pizza)")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            match clean_query(input) {
                Some(_) => Ok(()),
                None => Err("Please enter a food name"),
            }
        })
        .interact_text()?;

    clean_query(&input)
        .ok_or_else(|| DietError::InvalidInput("Food name must not be empty".to_string()))
}

/// Trimmed query, or `None` when nothing is left to search for.
fn clean_query(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

/// Let the user tick which optional ingredients to include.
pub fn prompt_optional_ingredients(food: &Food) -> Result<HashSet<String>> {
    if food.optional_ingredients.is_empty() {
        return Ok(HashSet::new());
    }

    let items: Vec<String> = food
        .optional_ingredients
        .values()
        .map(|i| {
            format!(
                "{} ({}, {}, {} kcal)",
                i.name, i.quantity_per_serving, i.category, i.calories
            )
        })
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select optional ingredients to include (space to toggle, enter to confirm)")
        .items(&items)
        .interact()?;

    let names = food.optional_names();
    Ok(chosen.into_iter().map(|i| names[i].to_string()).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

use std::collections::HashSet;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use diet_index_scorer::catalog::{load_catalog, IndexCatalog};
use diet_index_scorer::cli::{Cli, Command};
use diet_index_scorer::error::{DietError, Result};
use diet_index_scorer::interface::{
    display_explanations, display_food, display_indices, display_match, display_scores,
    display_summary, prompt_food_query, prompt_optional_ingredients, prompt_yes_no,
    write_scores_csv,
};
use diet_index_scorer::models::{Food, ScoreCard};
use diet_index_scorer::DietAnalyzer;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let analyzer = build_analyzer(&cli)?;

    match cli.command.unwrap_or_default() {
        Command::Assess => cmd_assess(&analyzer),
        Command::Score {
            query,
            with,
            explain,
            csv,
        } => cmd_score(&analyzer, &query, with, explain, csv.as_deref()),
        Command::Search { query } => cmd_search(&analyzer, &query),
        Command::Indices => {
            display_indices(analyzer.indices());
            Ok(())
        }
    }
}

/// Load both catalogs once; any failure stops the program.
fn build_analyzer(cli: &Cli) -> Result<DietAnalyzer> {
    let indices = match &cli.indices {
        Some(path) => IndexCatalog::load(path)?,
        None => IndexCatalog::standard()?,
    };

    if !cli.file.exists() {
        return Err(DietError::InvalidInput(format!(
            "Food catalog not found: {} (pass --file <path>)",
            cli.file.display()
        )));
    }
    let foods = load_catalog(&cli.file)?;

    DietAnalyzer::new(foods, indices).with_threshold(cli.threshold)
}

/// Interactive loop: search, pick optional ingredients, score, explain.
fn cmd_assess(analyzer: &DietAnalyzer) -> Result<()> {
    println!("Loaded {} foods", analyzer.foods().len());

    loop {
        let query = prompt_food_query()?;
        let found = analyzer.find_food(&query);
        display_match(&query, found.as_ref());

        if let Some(m) = found {
            let food = analyzer
                .foods()
                .get(m.name)
                .ok_or_else(|| DietError::FoodNotFound(m.name.to_string()))?;
            display_food(food);

            let selected = prompt_optional_ingredients(food)?;
            report(analyzer, food, &selected, true)?;
        }

        if !prompt_yes_no("Score another food?", true)? {
            break;
        }
    }

    Ok(())
}

fn cmd_score(
    analyzer: &DietAnalyzer,
    query: &str,
    with: Vec<String>,
    explain: bool,
    csv: Option<&Path>,
) -> Result<()> {
    let (food, found) = analyzer.lookup(query)?;
    display_match(query, Some(&found));
    display_food(food);

    let selected: HashSet<String> = with.into_iter().collect();
    for name in &selected {
        if !food.has_optional(name) {
            println!("Ignoring '{}': not an optional ingredient of {}", name, food.name);
        }
    }

    let card = report(analyzer, food, &selected, explain)?;

    if let Some(path) = csv {
        write_scores_csv(&card, path)?;
        println!("Scores written to {}", path.display());
    }

    Ok(())
}

fn cmd_search(analyzer: &DietAnalyzer, query: &str) -> Result<()> {
    let found = analyzer.find_food(query);
    display_match(query, found.as_ref());
    Ok(())
}

/// Score a food and print the table, optional explanations and summary.
fn report(
    analyzer: &DietAnalyzer,
    food: &Food,
    selected: &HashSet<String>,
    explain: bool,
) -> Result<ScoreCard> {
    let card = analyzer.score_food(food, selected);
    display_scores(&card, selected);

    if explain {
        let sections = card
            .ranked()
            .into_iter()
            .map(|r| Ok((r.index_name.clone(), analyzer.explain(r)?)))
            .collect::<Result<Vec<_>>>()?;
        display_explanations(&sections);
        display_summary(&analyzer.summarize(food, selected));
    }

    Ok(card)
}

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;

pub use analyzer::DietAnalyzer;
pub use error::{DietError, Result};
pub use models::{DietaryIndex, Food, Ingredient, ScoreCard, ScoreResult};

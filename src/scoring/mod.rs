pub mod constants;
pub mod engine;
pub mod explain;
pub mod matcher;
pub mod normalize;

pub use constants::*;
pub use engine::ScoringEngine;
pub use explain::{improvable_components, title_case, Assessment, ComponentSummary, ExplanationTables, SummaryItem};
pub use matcher::{best_match, similarity, FoodMatch};
pub use normalize::{normalize_category, CategoryNormalizer};

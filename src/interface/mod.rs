pub mod export;
pub mod prompts;
pub mod render;

pub use export::{score_rows, write_scores_csv, ScoreRow};
pub use prompts::{prompt_food_query, prompt_optional_ingredients, prompt_yes_no};
pub use render::{
    display_explanations, display_food, display_indices, display_match, display_scores,
    display_summary,
};

pub mod food;
pub mod index;
pub mod score;

pub use food::{Food, Ingredient};
pub use index::DietaryIndex;
pub use score::{ScoreCard, ScoreResult};

mod foods;
mod indices;

pub use foods::{load_catalog, FoodCatalog};
pub use indices::IndexCatalog;

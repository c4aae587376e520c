pub mod cs;
pub mod error;

pub use cs::dynamic::{levenshtein_distance, EditDistance, LevenshteinDistance};
pub use error::{Error, Result};

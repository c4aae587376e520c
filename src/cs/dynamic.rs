pub mod edit_distance;
pub mod levenshtein;

// Re-export the metric contract and its implementations
pub use edit_distance::{levenshtein_distance, EditDistance};
pub use levenshtein::LevenshteinDistance;

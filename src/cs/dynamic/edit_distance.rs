//! Edit distance metrics.

use crate::error::Result;

/// Measures the number of edits (deletions, insertions, substitutions, exchanges)
/// needed to turn one word into another.
///
/// Implementations must be symmetric: `get(a, b, f) == get(b, a, f)` for every
/// valid input. The result is `0` exactly when the (possibly case-folded)
/// strings are equal.
///
/// `get` takes `&mut self` so that an implementation can keep working storage
/// between calls.
///
/// # Examples
///
/// ```
/// use namedist::{EditDistance, LevenshteinDistance};
///
/// fn closest<'a, M: EditDistance>(metric: &mut M, name: &str, candidates: &[&'a str]) -> Option<&'a str> {
///     candidates
///         .iter()
///         .copied()
///         .filter_map(|c| metric.get(name, c, true).ok().map(|d| (d, c)))
///         .min()
///         .map(|(_, c)| c)
/// }
///
/// let mut metric = LevenshteinDistance::new();
/// assert_eq!(closest(&mut metric, "Jon", &["John", "Joan", "Jane"]), Some("Joan"));
/// ```
pub trait EditDistance {
    /// Returns the edit distance between `a` and `b`.
    ///
    /// When `ignore_case` is `true`, both strings are lowercased before they
    /// are compared.
    fn get(&mut self, a: &str, b: &str, ignore_case: bool) -> Result<usize>;
}

impl<T: EditDistance + ?Sized> EditDistance for &mut T {
    fn get(&mut self, a: &str, b: &str, ignore_case: bool) -> Result<usize> {
        (**self).get(a, b, ignore_case)
    }
}

impl<T: EditDistance + ?Sized> EditDistance for Box<T> {
    fn get(&mut self, a: &str, b: &str, ignore_case: bool) -> Result<usize> {
        (**self).get(a, b, ignore_case)
    }
}

/// Computes the Levenshtein distance between two string slices without any
/// retained state.
///
/// Unlike [`LevenshteinDistance`](crate::LevenshteinDistance) this accepts empty
/// input (the distance is then the length of the other string) and does no case
/// folding. Lengths are counted in `char`s.
///
/// # Examples
///
/// ```
/// use namedist::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", "Anna"), 4);
/// assert_eq!(levenshtein_distance("Stephen", "Steven"), 2);
/// assert_eq!(levenshtein_distance("Mohammed", "Muhammad"), 2);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();

    // `row[j]` is the distance from the prefix of `a` seen so far to `b[..j]`.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }

    row[b.len()]
}

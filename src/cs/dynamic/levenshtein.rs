//! Levenshtein distance with a cost table that is kept between calls.

use std::borrow::Cow;
use std::mem;

use log::{debug, trace};
use ndarray::Array2;

use super::edit_distance::EditDistance;
use crate::error::{Error, Result};

/// The Levenshtein edit distance algorithm.
///
/// Only insertions, deletions and substitutions of single characters are
/// counted, each at cost 1. Exchanging two adjacent characters is not an
/// operation of its own and costs two substitutions.
///
/// The engine owns its cost table and grows it on demand, so a long run of
/// comparisons between short strings (names, typically) allocates only when a
/// larger pair than any seen before comes along. The table never shrinks.
/// Give each thread its own engine; `get` takes `&mut self`.
///
/// Characters are compared as Unicode scalar values (`char`), so a character
/// outside the Basic Multilingual Plane counts as one character, not two.
///
/// Empty strings are rejected with [`Error::InvalidArgument`] rather than
/// measured against the other string's length.
///
/// # Examples
///
/// ```
/// use namedist::{EditDistance, Error, LevenshteinDistance};
///
/// let mut lev = LevenshteinDistance::new();
/// assert_eq!(lev.get("kitten", "sitting", false), Ok(3));
/// assert_eq!(lev.get("CAT", "cat", true), Ok(0));
/// assert_eq!(lev.get("CAT", "cat", false), Ok(3));
/// assert_eq!(lev.get("", "x", false), Err(Error::InvalidArgument("a")));
/// ```
#[derive(Debug, Clone)]
pub struct LevenshteinDistance {
    /// Cost table; `d[[i, j]]` is the distance between the first `i` chars of
    /// the row string and the first `j` chars of the column string.
    d: Array2<usize>,
    /// Shorter string of the current call.
    row: Vec<char>,
    /// Longer string of the current call.
    col: Vec<char>,
}

impl Default for LevenshteinDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl LevenshteinDistance {
    /// Creates an engine with a `1 × 1` table.
    pub fn new() -> Self {
        Self {
            d: Array2::zeros((1, 1)),
            row: Vec::new(),
            col: Vec::new(),
        }
    }

    /// Creates an engine whose table already fits a pair of strings of
    /// `shorter` and `longer` chars.
    pub fn with_capacity(shorter: usize, longer: usize) -> Self {
        let mut engine = Self::new();
        engine.reserve(shorter + 1, longer + 1);
        engine.row.reserve(shorter);
        engine.col.reserve(longer);
        engine
    }

    /// Current `(rows, columns)` of the cost table.
    pub fn capacity(&self) -> (usize, usize) {
        self.d.dim()
    }

    /// Grows the table to at least `rows × cols`, re-deriving the base cases
    /// over the whole new table.
    fn reserve(&mut self, rows: usize, cols: usize) {
        let (old_rows, old_cols) = self.d.dim();
        if old_rows >= rows && old_cols >= cols {
            return;
        }

        let rows = old_rows.max(rows);
        let cols = old_cols.max(cols);
        debug!(
            "growing Levenshtein cost table from {}x{} to {}x{}",
            old_rows, old_cols, rows, cols
        );

        let mut d = Array2::zeros((rows, cols));
        for (i, cell) in d.column_mut(0).iter_mut().enumerate() {
            *cell = i;
        }
        for (j, cell) in d.row_mut(0).iter_mut().enumerate().skip(1) {
            *cell = j;
        }
        self.d = d;
    }

    /// Loads the two strings into the scratch buffers, shorter one as the row.
    fn load(&mut self, a: &str, b: &str) {
        self.row.clear();
        self.row.extend(a.chars());
        self.col.clear();
        self.col.extend(b.chars());
        if self.col.len() < self.row.len() {
            mem::swap(&mut self.row, &mut self.col);
        }
    }
}

impl EditDistance for LevenshteinDistance {
    fn get(&mut self, a: &str, b: &str, ignore_case: bool) -> Result<usize> {
        if a.is_empty() {
            debug!("rejected empty `a` (b = {:?})", b);
            return Err(Error::InvalidArgument("a"));
        }
        if b.is_empty() {
            debug!("rejected empty `b` (a = {:?})", a);
            return Err(Error::InvalidArgument("b"));
        }

        let (a, b): (Cow<str>, Cow<str>) = if ignore_case {
            (a.to_lowercase().into(), b.to_lowercase().into())
        } else {
            (a.into(), b.into())
        };

        if a == b {
            trace!("{:?} == {:?}", a, b);
            return Ok(0);
        }

        self.load(&a, &b);
        let (m, n) = (self.row.len(), self.col.len());
        self.reserve(m + 1, n + 1);

        let d = &mut self.d;
        for (i, &rc) in self.row.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            for (j, &cc) in self.col.iter().enumerate().map(|(j, c)| (j + 1, c)) {
                let deletion = d[[i - 1, j]] + 1;
                let insertion = d[[i, j - 1]] + 1;
                let substitution = d[[i - 1, j - 1]] + usize::from(rc != cc);
                d[[i, j]] = deletion.min(insertion).min(substitution);
            }
        }

        let distance = d[[m, n]];
        trace!("distance({:?}, {:?}) = {} ({}x{})", a, b, distance, m, n);
        Ok(distance)
    }
}

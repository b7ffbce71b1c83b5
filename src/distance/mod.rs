//! Distance metric implementations.
//!
//! This module provides edit distance implementations for direct distance
//! computation between two strings.
//!
//! Two implementation styles are available:
//! - **Iterative DP**: Space-optimized dynamic programming (two rows) with
//!   configurable, real-valued operation costs
//! - **Recursive + Memoization**: Top-down reference implementation with a
//!   caller-owned cache and fixed costs
//!
//! Both measure the same metric: the minimum total cost of single-character
//! deletions, insertions and substitutions that transforms the source into the
//! target. Characters are compared as Unicode scalar values with no
//! normalization, so case and punctuation are significant.

use smallvec::SmallVec;

mod costs;
mod error;
mod memo;

pub use costs::{
    EditCosts, DEFAULT_DELETION_COST, DEFAULT_INSERTION_COST, DEFAULT_SUBSTITUTION_COST,
};
pub use error::{DistanceError, Operation, Result};
pub use memo::{edit_distance_memoized, MemoCache};

/// Compute the weighted edit distance between two strings.
///
/// Returns the minimum total cost of deletions (removing a character of
/// `source`), insertions (adding a character of `target`) and substitutions
/// (replacing a character of `source` with a different one of `target`)
/// that transforms `source` into `target`. Matching characters cost nothing.
///
/// Only two rows of the DP matrix are kept, each sized by the shorter input.
/// When `target` is the longer string the problem is solved in reverse with
/// deletion and insertion costs swapped, which gives the same result.
///
/// # Example
///
/// ```rust
/// use lexsim::distance::{edit_distance, EditCosts};
///
/// let costs = EditCosts::default();
/// assert_eq!(edit_distance("kitten", "sitting", costs), 5.0);
/// assert_eq!(edit_distance("tree", "three", costs), 1.0);
///
/// let cheap_delete = costs.with_deletion(0.5).unwrap();
/// assert_eq!(edit_distance("shut", "hut", cheap_delete), 0.5);
/// ```
pub fn edit_distance(source: &str, target: &str, costs: EditCosts) -> f64 {
    if source == target {
        return 0.0;
    }

    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    if target_chars.len() > source_chars.len() {
        weighted_distance(&target_chars, &source_chars, costs.transposed())
    } else {
        weighted_distance(&source_chars, &target_chars, costs)
    }
}

/// Compute the edit distance with the default costs (1 / 1 / 2).
///
/// # Example
///
/// ```rust
/// use lexsim::distance::edit_distance_default;
///
/// assert_eq!(edit_distance_default("cell", "hell"), 2.0);
/// ```
pub fn edit_distance_default(source: &str, target: &str) -> f64 {
    edit_distance(source, target, EditCosts::default())
}

/// Two-row DP over `source` (outer) and `target` (inner).
fn weighted_distance(source: &[char], target: &[char], costs: EditCosts) -> f64 {
    let n = target.len();

    // D(0, j): insert every character of the target prefix
    let mut prev_row: SmallVec<[f64; 32]> =
        (0..=n).map(|j| j as f64 * costs.insertion()).collect();
    let mut curr_row: SmallVec<[f64; 32]> = SmallVec::from_elem(0.0, n + 1);

    for (i, &source_char) in source.iter().enumerate() {
        // D(i, 0): delete every character of the source prefix
        curr_row[0] = (i + 1) as f64 * costs.deletion();

        for (j, &target_char) in target.iter().enumerate() {
            let substitution = if source_char == target_char {
                0.0
            } else {
                costs.substitution()
            };

            curr_row[j + 1] = (prev_row[j + 1] + costs.deletion()) // deletion
                .min(curr_row[j] + costs.insertion()) // insertion
                .min(prev_row[j] + substitution); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the Hamming distance between two strings of equal length.
///
/// Counts the positions at which the characters differ. Lengths are measured
/// in characters.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] when the inputs have different
/// lengths.
///
/// # Example
///
/// ```rust
/// use lexsim::distance::hamming_distance;
///
/// assert_eq!(hamming_distance("class", "fleet").unwrap(), 4);
/// assert!(hamming_distance("different", "lengths").is_err());
/// ```
pub fn hamming_distance(left: &str, right: &str) -> Result<usize> {
    let left_len = left.chars().count();
    let right_len = right.chars().count();

    if left_len != right_len {
        return Err(DistanceError::LengthMismatch {
            left: left_len,
            right: right_len,
        });
    }

    Ok(left
        .chars()
        .zip(right.chars())
        .filter(|(a, b)| a != b)
        .count())
}

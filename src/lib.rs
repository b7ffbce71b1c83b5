//! # lexsim
//!
//! Lexical similarity between strings.
//!
//! Two complementary techniques are provided:
//!
//! - [`distance`]: edit distance, the minimum cost of single-character
//!   deletions, insertions and substitutions turning one string into another,
//!   with configurable per-operation costs.
//! - [`phonetic`]: Soundex codes, which let words be compared by how they
//!   sound rather than how they are spelled.
//!
//! The two compose: measuring the edit distance between phonetic codes
//! approximates "sounds like" similarity.
//!
//! ## Example
//!
//! ```rust
//! use lexsim::prelude::*;
//!
//! let costs = EditCosts::default();
//! assert_eq!(edit_distance("kitten", "sitting", costs), 5.0);
//!
//! let cache = MemoCache::new();
//! assert_eq!(edit_distance_memoized("kitten", "sitting", &cache), 5);
//!
//! assert_eq!(phonetic_code("Robert"), phonetic_code("Rupert"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod phonetic;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{
        edit_distance, edit_distance_default, edit_distance_memoized, hamming_distance,
        DistanceError, EditCosts, MemoCache,
    };
    pub use crate::phonetic::{phonetic_code, sounds_like_distance, HwPolicy, Soundex};
}

//! Phonetic encoding for approximate "sounds like" comparison.
//!
//! Edit distance compares spelling. A phonetic code compares pronunciation:
//! words that sound alike but are spelled differently map to the same, or a
//! nearby, code. The rules are specific to English and the basic Latin
//! alphabet.
//!
//! # Usage
//!
//! ```rust
//! use lexsim::distance::EditCosts;
//! use lexsim::phonetic::{phonetic_code, sounds_like_distance};
//!
//! assert_eq!(phonetic_code("Tymczak"), "T522");
//!
//! // Spelling differs a lot, pronunciation barely
//! let costs = EditCosts::default();
//! assert_eq!(sounds_like_distance("fone", "phone", costs), 2.0);
//! ```

mod soundex;

pub use soundex::{HwPolicy, Soundex, CODE_LEN, EMPTY_CODE};

use crate::distance::{edit_distance, EditCosts};

/// Encode a word with the default [`Soundex`] encoder.
///
/// Always returns four characters: an upper-case letter followed by three
/// digits, or [`EMPTY_CODE`] when the input has no ASCII letter.
pub fn phonetic_code(word: &str) -> String {
    Soundex::default().encode(word)
}

/// Edit distance between the default phonetic codes of two words.
pub fn sounds_like_distance(source: &str, target: &str, costs: EditCosts) -> f64 {
    Soundex::default().distance(source, target, costs)
}

impl Soundex {
    /// Edit distance between the codes of two words under this encoder.
    pub fn distance(&self, source: &str, target: &str, costs: EditCosts) -> f64 {
        edit_distance(&self.encode(source), &self.encode(target), costs)
    }
}

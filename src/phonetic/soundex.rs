//! Soundex phonetic encoding.
//!
//! Letters are grouped into the following classes:
//!
//! ```text
//! A E I O U Y        0   (discarded after collapsing)
//! B F P V            1
//! C G J K Q S X Z    2
//! D T                3
//! L                  4
//! M N                5
//! R                  6
//! H W                0 or nothing, see HwPolicy
//! ```

use std::iter;

use smallvec::SmallVec;

/// Length of every Soundex code.
pub const CODE_LEN: usize = 4;

/// Code returned for input without any ASCII letter.
pub const EMPTY_CODE: &str = "0000";

const VOWEL: u8 = b'0';

/// How `H` and `W` take part in duplicate collapsing.
///
/// The two policies differ for words such as "Ashcraft", where two letters of
/// the same class are separated only by `H` or `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum HwPolicy {
    /// `H` and `W` contribute no code at all. Same-class letters on either
    /// side of them collapse into one digit ("Ashcraft" → `A261`).
    ///
    /// This is the American Soundex rule.
    #[default]
    Transparent,

    /// `H` and `W` code like vowels. They separate same-class letters, which
    /// are then counted twice ("Ashcraft" → `A226`).
    Separator,
}

impl HwPolicy {
    /// Get a human-readable name for this policy
    pub fn name(&self) -> &'static str {
        match self {
            HwPolicy::Transparent => "transparent",
            HwPolicy::Separator => "separator",
        }
    }
}

impl std::fmt::Display for HwPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HwPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transparent" => Ok(HwPolicy::Transparent),
            "separator" => Ok(HwPolicy::Separator),
            _ => Err(format!(
                "Unknown H/W policy: {}. Valid options: transparent, separator",
                s
            )),
        }
    }
}

/// Soundex encoder.
///
/// Maps a word to a four-character code: its first letter followed by three
/// digits describing the consonant sounds that follow. Only ASCII letters are
/// considered, case-insensitively; everything else is dropped. Input without
/// any letter encodes to [`EMPTY_CODE`].
///
/// # Example
///
/// ```rust
/// use lexsim::phonetic::{HwPolicy, Soundex};
///
/// let soundex = Soundex::default();
/// assert_eq!(soundex.encode("Robert"), "R163");
/// assert_eq!(soundex.encode("Rupert"), "R163");
/// assert_eq!(soundex.encode(""), "0000");
///
/// let separator = Soundex::new(HwPolicy::Separator);
/// assert_eq!(separator.encode("Ashcraft"), "A226");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Soundex {
    hw_policy: HwPolicy,
}

impl Soundex {
    /// Create an encoder with the given H/W policy.
    pub const fn new(hw_policy: HwPolicy) -> Self {
        Self { hw_policy }
    }

    /// The H/W policy of this encoder.
    pub fn hw_policy(&self) -> HwPolicy {
        self.hw_policy
    }

    /// Encode a word.
    pub fn encode(&self, word: &str) -> String {
        let letters: SmallVec<[u8; 32]> = word
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_uppercase())
            .collect();

        let Some(&first) = letters.first() else {
            return EMPTY_CODE.to_owned();
        };

        // Code every letter, the first one included, collapsing runs of the
        // same digit. The first code is always kept.
        let mut digits: SmallVec<[u8; 32]> = SmallVec::new();
        let mut previous = None;
        for digit in letters.iter().filter_map(|&letter| self.digit(letter)) {
            if previous != Some(digit) {
                digits.push(digit);
            }
            previous = Some(digit);
        }

        // Vowels only matter as separators; drop them once collapsing is done
        digits.retain(|digit| *digit != VOWEL);

        // The leading letter already stands for its own class
        if let Some(&lead) = digits.first() {
            if Some(lead) == self.digit(first) {
                digits.remove(0);
            }
        }

        let mut code = String::with_capacity(CODE_LEN);
        code.push(char::from(first));
        code.extend(
            digits
                .iter()
                .map(|&digit| char::from(digit))
                .chain(iter::repeat('0'))
                .take(CODE_LEN - 1),
        );
        code
    }

    /// Digit class of an upper-case ASCII letter, or `None` when the letter
    /// contributes nothing.
    #[inline]
    fn digit(&self, letter: u8) -> Option<u8> {
        match letter {
            b'A' | b'E' | b'I' | b'O' | b'U' | b'Y' => Some(VOWEL),
            b'H' | b'W' => match self.hw_policy {
                HwPolicy::Transparent => None,
                HwPolicy::Separator => Some(VOWEL),
            },
            b'B' | b'F' | b'P' | b'V' => Some(b'1'),
            b'C' | b'G' | b'J' | b'K' | b'Q' | b'S' | b'X' | b'Z' => Some(b'2'),
            b'D' | b'T' => Some(b'3'),
            b'L' => Some(b'4'),
            b'M' | b'N' => Some(b'5'),
            b'R' => Some(b'6'),
            _ => None,
        }
    }
}

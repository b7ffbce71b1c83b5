//! Integration tests for Soundex encoding and "sounds like" comparison.

use lexsim::distance::{edit_distance_default, EditCosts};
use lexsim::phonetic::{phonetic_code, sounds_like_distance, HwPolicy, Soundex};

#[test]
fn test_empty_s() {
    assert_eq!(phonetic_code(""), "0000");
}

#[test]
fn test_vowels() {
    assert_eq!(phonetic_code("AI"), "A000");
    assert_eq!(phonetic_code("you"), "Y000");
    assert_eq!(phonetic_code("either"), "E360");
    assert_eq!(phonetic_code("and"), "A530");
    assert_eq!(phonetic_code("ammonium"), "A555");
    assert_eq!(phonetic_code("Ashcraft"), "A261");
    assert_eq!(phonetic_code("Ashcroft"), "A261");
    assert_eq!(phonetic_code("Honeyman"), "H555");
}

#[test]
fn test_consonants() {
    assert_eq!(phonetic_code("Robert"), "R163");
    assert_eq!(phonetic_code("Robert"), phonetic_code("Rupert"));
    assert_eq!(phonetic_code("Rubin"), "R150");
    assert_eq!(phonetic_code("Tymczak"), "T522");
    assert_eq!(phonetic_code("Pfister"), "P236");
}

#[test]
fn test_separator_policy() {
    let soundex = Soundex::new(HwPolicy::Separator);
    assert_eq!(soundex.hw_policy(), HwPolicy::Separator);

    // Only words with H or W between same-class letters change
    assert_eq!(soundex.encode("Ashcraft"), "A226");
    assert_eq!(soundex.encode("Robert"), "R163");
    assert_eq!(soundex.encode("Tymczak"), "T522");
    assert_eq!(soundex.encode("Pfister"), "P236");
    assert_eq!(soundex.encode("Honeyman"), "H555");
}

#[test]
fn test_default_encoder_is_transparent() {
    assert_eq!(Soundex::default().hw_policy(), HwPolicy::Transparent);
    assert_eq!(
        Soundex::default().encode("Ashcraft"),
        phonetic_code("Ashcraft")
    );
}

#[test]
fn test_case_and_punctuation_are_ignored() {
    assert_eq!(phonetic_code("ROBERT"), phonetic_code("robert"));
    assert_eq!(phonetic_code("Rob-ert!"), "R163");
    assert_eq!(phonetic_code("123"), "0000");
}

#[test]
fn test_phonetic_layer_reduces_distance_for_homophones() {
    let costs = EditCosts::default();
    let misspelled = "nite fone thru";
    let correct = "night phone through";

    let pairs: Vec<(&str, &str)> = misspelled
        .split_whitespace()
        .zip(correct.split_whitespace())
        .collect();

    let spelling: f64 = pairs
        .iter()
        .map(|(a, b)| edit_distance_default(a, b))
        .sum();
    let sound: f64 = pairs
        .iter()
        .map(|(a, b)| sounds_like_distance(a, b, costs))
        .sum();

    assert_eq!(spelling, 9.0);
    assert_eq!(sound, 6.0);
    assert!(spelling > sound);
}

//! String utility functions
//!
//! Species identifiers arrive as free text ("Panthera leo"), are stored on
//! disk as lower-case keys ("panthera_leo") and are shown in title case
//! ("Panthera Leo").

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{RangeError, RangeResult};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// Normalize a species name into its directory key
///
/// Lower-cases the name and replaces whitespace runs with `_`.
pub fn species_key(name: &str) -> RangeResult<String> {
    let key = WHITESPACE.replace_all(name.trim(), "_").to_lowercase();

    if key.is_empty() {
        return Err(RangeError::MissingInput("species name".to_string()));
    }
    if key.contains('/') || key.contains('\\') || key == "." || key == ".." {
        return Err(RangeError::GenericError(format!("Invalid species name: {}", name)));
    }

    Ok(key)
}

/// Display form of a species key
///
/// Underscores become spaces and every word is capitalized.
pub fn display_name(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut previous_is_letter = false;

    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_key() {
        assert_eq!(species_key("Panthera leo").unwrap(), "panthera_leo");
        assert_eq!(species_key("  Panthera \t leo ").unwrap(), "panthera_leo");
        assert_eq!(species_key("panthera_leo").unwrap(), "panthera_leo");
    }

    #[test]
    fn test_species_key_rejects_bad_names() {
        assert!(matches!(species_key("   "), Err(RangeError::MissingInput(_))));
        assert!(species_key("../etc").is_err());
        assert!(species_key("..").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("panthera_leo"), "Panthera Leo");
        assert_eq!(display_name("quercus_robur_subsp._robur"), "Quercus Robur Subsp. Robur");
        assert_eq!(display_name("x"), "X");
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for the script detector

use namecall::script::{detect, DetectionResult};
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_is_always_a_proportion(input in "\\PC*") {
        let result = detect(&input);
        prop_assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of range for {:?}",
            result.confidence,
            input
        );
    }

    #[test]
    fn plain_latin_names_are_english(input in "[A-Za-z '.-]{1,40}") {
        prop_assert_eq!(detect(&input), DetectionResult::new("English", 0.80));
    }

    #[test]
    fn digit_and_symbol_strings_are_unknown(input in "[0-9!@#$%^&*()_+=,;:]{1,20}") {
        prop_assert_eq!(detect(&input), DetectionResult::unknown());
    }

    #[test]
    fn all_ideograph_names_are_fully_chinese(input in "[\u{4E00}-\u{9FFF}]{1,8}") {
        prop_assert_eq!(detect(&input), DetectionResult::new("Chinese", 1.0));
    }

    #[test]
    fn devanagari_is_always_relabelled(input in "[\u{0900}-\u{097F}]{1,12}") {
        prop_assert_eq!(detect(&input).language, "Hindi");
    }

    #[test]
    fn detection_is_deterministic(input in "\\PC{0,24}") {
        prop_assert_eq!(detect(&input), detect(&input));
    }

    #[test]
    fn unknown_always_has_zero_confidence(input in "\\PC{0,24}") {
        let result = detect(&input);
        if result.is_unknown() {
            prop_assert_eq!(result.confidence, 0.0);
        }
    }
}

#[test]
fn empty_and_blank_differ() {
    assert_eq!(detect(""), DetectionResult::new("Unknown", 0.0));
    assert_eq!(detect(" "), DetectionResult::new("English", 0.80));
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Detector behaviour on realistic names

use namecall::script::{detect, get_language_info, DetectionResult, DEFAULT_LANGUAGE_INFO};
use std::sync::Arc;
use std::thread;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(detect("张伟"), DetectionResult::new("Chinese", 1.0));
    assert_eq!(detect("John Smith"), DetectionResult::new("English", 0.80));
    assert_eq!(detect("こんにちは"), DetectionResult::new("Japanese", 1.0));
    assert_eq!(detect("123456"), DetectionResult::new("Unknown", 0.0));

    let nguyen = detect("Nguyễn");
    assert_eq!(nguyen.language, "Vietnamese");
    assert!(approx(nguyen.confidence, 1.0 / 6.0), "got {}", nguyen.confidence);
}

#[test]
fn test_each_script_family() {
    let cases = [
        ("李明", "Chinese"),
        ("サトウ", "Japanese"),
        ("김민준", "Korean"),
        ("محمد", "Arabic"),
        ("प्रिया", "Hindi"),
        ("สมชาย", "Thai"),
        ("Иван", "Cyrillic"),
        ("Νίκος", "Greek"),
    ];
    for (name, expected) in cases {
        let result = detect(name);
        assert_eq!(result.language, expected, "{name}");
        assert!(result.confidence > 0.0 && result.confidence <= 1.0, "{name}");
    }
}

#[test]
fn test_devanagari_never_leaks_as_label() {
    for name in ["राहुल", "अनीता देवी", "सुनील"] {
        assert_eq!(detect(name).language, "Hindi");
    }
}

#[test]
fn test_full_vietnamese_name() {
    // ễ, ă, ă: three diacritic letters out of 13 characters.
    let result = detect("Nguyễn Văn Ăn");
    assert_eq!(result.language, "Vietnamese");
    assert!(approx(result.confidence, 3.0 / 13.0));
}

#[test]
fn test_diacritic_only_name_uses_computed_share() {
    // Every character carries a diacritic, so the share is complete.
    assert_eq!(detect("Ăơ"), DetectionResult::new("Vietnamese", 1.0));
}

#[test]
fn test_japanese_name_with_kanji_family_name() {
    // 佐藤 is two ideographs; さくら is three kana.
    let result = detect("佐藤さくら");
    assert_eq!(result.language, "Japanese");
    assert!(approx(result.confidence, 3.0 / 5.0));
}

#[test]
fn test_latin_with_non_ascii_accents_is_unknown() {
    // ü is not Vietnamese and not in the plain Latin pattern.
    assert_eq!(detect("Müller"), DetectionResult::unknown());
}

#[test]
fn test_punctuation_only() {
    assert_eq!(detect("---"), DetectionResult::new("English", 0.80));
    assert_eq!(detect("@#$"), DetectionResult::unknown());
}

#[test]
fn test_language_info_for_detected_labels() {
    assert!(get_language_info(detect("张伟").language).family_name_first);
    assert!(!get_language_info(detect("John Smith").language).family_name_first);
    assert_eq!(*get_language_info(detect("Иван").language), DEFAULT_LANGUAGE_INFO);
    assert_eq!(*get_language_info("Klingon"), DEFAULT_LANGUAGE_INFO);
}

#[test]
fn test_concurrent_callers_agree() {
    let names: Arc<Vec<&'static str>> =
        Arc::new(vec!["张伟", "Nguyễn", "John Smith", "こんにちは", "123456", "नमस्ते"]);
    let expected: Vec<DetectionResult> = names.iter().map(|n| detect(n)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let names = Arc::clone(&names);
            thread::spawn(move || names.iter().map(|n| detect(n)).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

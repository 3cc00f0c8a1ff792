// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unicode block tables used by the detector.

/// An inclusive range of code points belonging to one script family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    pub start: u32,
    pub end: u32,
}

impl ScriptRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }
}

/// Script families in detection order.
///
/// A character is credited to the first family whose ranges contain it, so
/// this order is part of the detector's observable behaviour.
pub const SCRIPT_TABLE: &[(&str, &[ScriptRange])] = &[
    (
        "Chinese",
        &[
            ScriptRange::new(0x4E00, 0x9FFF),   // CJK Unified Ideographs
            ScriptRange::new(0x3400, 0x4DBF),   // CJK Extension A
            ScriptRange::new(0x20000, 0x2A6DF), // CJK Extension B
        ],
    ),
    (
        "Japanese",
        &[
            ScriptRange::new(0x3040, 0x309F), // Hiragana
            ScriptRange::new(0x30A0, 0x30FF), // Katakana
        ],
    ),
    (
        "Korean",
        &[
            ScriptRange::new(0xAC00, 0xD7AF), // Hangul Syllables
            ScriptRange::new(0x1100, 0x11FF), // Hangul Jamo
        ],
    ),
    (
        "Arabic",
        &[
            ScriptRange::new(0x0600, 0x06FF),
            ScriptRange::new(0x0750, 0x077F), // Arabic Supplement
        ],
    ),
    ("Devanagari", &[ScriptRange::new(0x0900, 0x097F)]),
    ("Thai", &[ScriptRange::new(0x0E00, 0x0E7F)]),
    ("Cyrillic", &[ScriptRange::new(0x0400, 0x04FF)]),
    ("Greek", &[ScriptRange::new(0x0370, 0x03FF)]),
];

/// Lowercase Latin letters whose diacritics only occur in Vietnamese
/// orthography: the base vowels ă â ê ô ơ ư, đ, and every tone-marked vowel.
const VIETNAMESE_DIACRITICS: &str = "ăâđêôơưàảãáạằẳẵắặầẩẫấậèẻẽéẹềểễếệìỉĩíịòỏõóọồổỗốộờởỡớợùủũúụừửữứựỳỷỹýỵ";

/// Returns the first family in [`SCRIPT_TABLE`] whose ranges contain `c`.
pub(crate) fn script_family_of(c: char) -> Option<&'static str> {
    let code_point = c as u32;
    SCRIPT_TABLE
        .iter()
        .find(|(_, ranges)| ranges.iter().any(|range| range.contains(code_point)))
        .map(|(label, _)| *label)
}

/// True when `c`, lowercased, is a Vietnamese diacritic letter.
///
/// Characters whose lowercase form expands to more than one character never
/// match.
pub fn is_vietnamese_diacritic(c: char) -> bool {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => VIETNAMESE_DIACRITICS.contains(l),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_lookup_uses_code_points() {
        assert_eq!(script_family_of('张'), Some("Chinese"));
        assert_eq!(script_family_of('\u{20000}'), Some("Chinese"));
        assert_eq!(script_family_of('か'), Some("Japanese"));
        assert_eq!(script_family_of('カ'), Some("Japanese"));
        assert_eq!(script_family_of('한'), Some("Korean"));
        assert_eq!(script_family_of('م'), Some("Arabic"));
        assert_eq!(script_family_of('न'), Some("Devanagari"));
        assert_eq!(script_family_of('ก'), Some("Thai"));
        assert_eq!(script_family_of('Д'), Some("Cyrillic"));
        assert_eq!(script_family_of('Ω'), Some("Greek"));
        assert_eq!(script_family_of('a'), None);
        assert_eq!(script_family_of('7'), None);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = ScriptRange::new(0x0E00, 0x0E7F);
        assert!(range.contains(0x0E00));
        assert!(range.contains(0x0E7F));
        assert!(!range.contains(0x0E80));
        assert!(!range.contains(0x0DFF));
    }

    #[test]
    fn vietnamese_diacritics_are_case_insensitive() {
        assert!(is_vietnamese_diacritic('ễ'));
        assert!(is_vietnamese_diacritic('Ễ'));
        assert!(is_vietnamese_diacritic('Đ'));
        assert!(is_vietnamese_diacritic('ư'));
        assert!(!is_vietnamese_diacritic('e'));
        assert!(!is_vietnamese_diacritic('ü'));
        // 'İ' lowercases to two characters.
        assert!(!is_vietnamese_diacritic('İ'));
    }
}

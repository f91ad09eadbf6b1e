//! Natural, case- and accent-insensitive ordering of filenames.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Folded comparison key: decomposed, stripped of combining marks, lowercased.
///
/// Whitespace and ASCII punctuation are remapped below `'0'` so they sort
/// before digits and letters, keeping their relative collation order.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_punctuation)
        .collect()
}

fn fold_punctuation(c: char) -> char {
    if c.is_whitespace() {
        return '\u{1}';
    }
    match PUNCTUATION_ORDER.find(c) {
        // Every char in the table is ASCII, so the byte offset is the rank.
        Some(rank) => char::from(2 + rank as u8),
        None => c,
    }
}

/// Compare two names the way a person reads them.
///
/// Digit runs compare by value (`img2` < `img10`), case and accents do not
/// matter at the primary level, and the raw name breaks remaining ties so
/// the result is a total order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_keyed(
        (collation_key(a).as_str(), a),
        (collation_key(b).as_str(), b),
    )
}

pub(crate) fn compare_keyed(a: (&str, &str), b: (&str, &str)) -> Ordering {
    alphanumeric_sort::compare_str(a.0, b.0).then_with(|| a.1.cmp(b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        names.sort_by(|a, b| compare_names(a, b));
        names
    }

    #[test]
    fn test_numeric_segments_compare_by_value() {
        assert_eq!(
            sorted(&["img10.png", "img2.png", "img1.png"]),
            vec!["img1.png", "img2.png", "img10.png"]
        );
        assert_eq!(
            sorted(&["file10", "file2"]),
            vec!["file2", "file10"]
        );
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(
            sorted(&["b.png", "a.PNG", "C.mp4"]),
            vec!["a.PNG", "b.png", "C.mp4"]
        );
    }

    #[test]
    fn test_accents_fold_to_base_letter() {
        assert_eq!(
            sorted(&["zebra.jpg", "écran.jpg", "eagle.jpg"]),
            vec!["eagle.jpg", "écran.jpg", "zebra.jpg"]
        );
    }

    #[test]
    fn test_separators_sort_before_digits_and_letters() {
        assert_eq!(
            sorted(&["a1.png", "a_b.png", "a-b.png", "a b.png", "a~b.png", "ab.png"]),
            vec!["a b.png", "a_b.png", "a-b.png", "a~b.png", "a1.png", "ab.png"]
        );
        assert_eq!(
            sorted(&["photo-final.jpg", "photo10.jpg", "photo_1.jpg", "photo2.jpg"]),
            vec!["photo_1.jpg", "photo-final.jpg", "photo2.jpg", "photo10.jpg"]
        );
    }

    #[test]
    fn test_punctuation_keeps_numeric_runs() {
        assert_eq!(
            sorted(&["x 10.png", "x 2.png", "x 1.png"]),
            vec!["x 1.png", "x 2.png", "x 10.png"]
        );
    }

    #[test]
    fn test_ties_are_broken_deterministically() {
        assert_eq!(compare_names("A.png", "a.png"), Ordering::Less);
        assert_eq!(compare_names("a.png", "A.png"), Ordering::Greater);
        assert_eq!(compare_names("a.png", "a.png"), Ordering::Equal);
    }
}

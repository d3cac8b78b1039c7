// Unit tests for normalization and word extraction.
//
// Covers the properties the rest of the pipeline leans on: idempotence,
// alphabet closure, deletion-merges-words, and tolerance of whitespace runs.

use fidel::text::normalize::{is_separator, normalize, Alphabet, Normalizer};
use fidel::text::symbols::{extract_words, Word};

const SAMPLES: &[&str] = &[
    "",
    "   \n\t ",
    "ሀ\u{1c}ለ\u{1f}\u{1b}መ",
    "ሰላም ዓለም። እንዴት ነህ?",
    "ሰላም፡ዓለም፡፡",
    "Mixed ሰላም text 123 with ዓለም, punctuation!",
    "🙂 ኢትዮጵያ\r\nኤርትራ 🙂",
    "\u{135D}\u{135E}\u{1369}\u{137C}",
    "abc xyz",
    "ቀ\u{00A0}ቁ\u{2003}ቂ",
];

// ============================================================
// Idempotence and alphabet closure
// ============================================================

#[test]
fn normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn normalize_output_is_alphabet_or_whitespace() {
    for sample in SAMPLES {
        for c in normalize(sample).chars() {
            assert!(
                Alphabet::ETHIOPIC.contains(c) || is_separator(c),
                "{c:?} (U+{:04X}) escaped normalization of {sample:?}",
                c as u32
            );
        }
    }
}

#[test]
fn normalize_with_custom_alphabet_is_idempotent() {
    let latin = Normalizer::new(Alphabet::new('a', 'z').unwrap());
    for sample in SAMPLES {
        let once = latin.normalize(sample);
        assert_eq!(latin.normalize(&once), once);
        assert!(once.chars().all(|c| ('a'..='z').contains(&c) || is_separator(c)));
    }
}

// ============================================================
// Deletion semantics
// ============================================================

#[test]
fn ethiopic_punctuation_is_removed() {
    assert_eq!(normalize("ሰላም።"), "ሰላም");
    assert_eq!(normalize("፩፪፫"), "");
}

#[test]
fn deleted_separator_merges_words() {
    let (table, _) = extract_words(&normalize("ሰላም፡ዓለም"));
    assert_eq!(table.total(), 1);
    assert_eq!(table.count(&Word::from("ሰላምዓለም")), 1);
}

#[test]
fn unicode_whitespace_is_kept_and_splits_words() {
    let cleaned = normalize("ቀ\u{00A0}ቁ\u{2003}ቂ");
    assert_eq!(cleaned, "ቀ\u{00A0}ቁ\u{2003}ቂ");
    let (table, _) = extract_words(&cleaned);
    assert_eq!(table.total(), 3);
}

#[test]
fn information_separators_split_words() {
    // U+001C..U+001F survive cleaning; U+001B is an ordinary control char
    let cleaned = normalize("ሀ\u{1c}ለ\u{1b}መ");
    assert_eq!(cleaned, "ሀ\u{1c}ለመ");
    let (table, _) = extract_words(&cleaned);
    assert_eq!(table.total(), 2);
    assert_eq!(table.count(&Word::from("ለመ")), 1);
}

#[test]
fn whitespace_runs_are_not_collapsed() {
    assert_eq!(normalize("ሀ  \n\n ለ"), "ሀ  \n\n ለ");
}

#[test]
fn all_non_alphabet_input_cleans_to_empty_words() {
    let cleaned = normalize("Hello, world! 42");
    assert!(cleaned.trim().is_empty());
    let (table, set) = extract_words(&cleaned);
    assert!(table.is_empty());
    assert!(set.is_empty());
}

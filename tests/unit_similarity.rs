// Unit tests for the similarity engine.
//
// Pins the algebraic properties (symmetry, identity, disjointness,
// monotonicity), the empty-union policy, and the exact rounding rule.

use fidel::similarity::overlap::{similarity, Percentage, UndefinedSimilarity};
use fidel::text::symbols::{extract_words, Phoneme, SymbolSet, Word};

fn words(items: &[&str]) -> SymbolSet<Word> {
    items.iter().map(|w| Word::from(*w)).collect()
}

fn phonemes(items: &[&str]) -> SymbolSet<Phoneme> {
    items.iter().map(|p| Phoneme::from(*p)).collect()
}

// ============================================================
// Properties
// ============================================================

#[test]
fn similarity_is_symmetric() {
    let pairs = [
        (words(&["a", "b", "c"]), words(&["b", "c", "d", "e"])),
        (words(&["ሰላም"]), words(&["ሰላም", "ዓለም"])),
        (words(&["x"]), words(&["y"])),
        (words(&["x", "y"]), words(&[])),
    ];
    for (a, b) in &pairs {
        assert_eq!(similarity(a, b), similarity(b, a));
    }
}

#[test]
fn identical_sets_score_full() {
    for set in [words(&["a"]), words(&["a", "b", "c"]), words(&["ቤት", "ሰው"])] {
        assert_eq!(similarity(&set, &set).unwrap().to_string(), "100.00");
    }
}

#[test]
fn disjoint_sets_score_zero() {
    let score = similarity(&words(&["a", "b"]), &words(&["c", "d", "e"])).unwrap();
    assert_eq!(score, Percentage::ZERO);
    assert_eq!(score.to_string(), "0.00");
}

#[test]
fn empty_sets_are_undefined() {
    assert_eq!(similarity(&words(&[]), &words(&[])), Err(UndefinedSimilarity));
    assert_eq!(
        similarity(&phonemes(&[]), &phonemes(&[])),
        Err(UndefinedSimilarity)
    );
}

#[test]
fn adding_shared_element_never_decreases_score() {
    let mut a = words(&["a", "b", "c"]);
    let mut b = words(&["c", "d"]);
    let mut previous = similarity(&a, &b).unwrap();

    for extra in ["s1", "s2", "s3", "s4", "s5", "s6"] {
        a.insert(Word::from(extra));
        b.insert(Word::from(extra));
        let next = similarity(&a, &b).unwrap();
        assert!(next >= previous, "{next} < {previous} after adding {extra}");
        previous = next;
    }
}

#[test]
fn score_is_bounded() {
    let cases = [
        (words(&["a"]), words(&["a", "b", "c", "d", "e", "f", "g"])),
        (words(&["a", "b"]), words(&["b"])),
    ];
    for (a, b) in &cases {
        let score = similarity(a, b).unwrap();
        assert!(score >= Percentage::ZERO && score <= Percentage::FULL);
        assert!(score < Percentage::FULL, "unequal sets must score below 100");
    }
}

// ============================================================
// Worked examples and rounding
// ============================================================

#[test]
fn worked_example_one_third() {
    let (a, set_a) = extract_words("ab cd ab");
    let (_, set_b) = extract_words("cd ef");
    assert_eq!(a.total(), 3);
    assert_eq!(set_a, words(&["ab", "cd"]));
    assert_eq!(similarity(&set_a, &set_b).unwrap().to_string(), "33.33");
}

#[test]
fn two_of_three_rounds_to_66_67() {
    let score = similarity(&words(&["a", "b", "c"]), &words(&["a", "b"])).unwrap();
    assert_eq!(score.to_string(), "66.67");
    assert_eq!(score.hundredths(), 6667);
}

#[test]
fn ties_round_half_up() {
    // 3/8 = 37.5% exactly, no tie at two decimals
    assert_eq!(Percentage::from_counts(3, 8).unwrap().to_string(), "37.50");
    // 1/800 = 0.125% is a tie at two decimals
    assert_eq!(Percentage::from_counts(1, 800).unwrap().to_string(), "0.13");
    // 3/800 = 0.375%
    assert_eq!(Percentage::from_counts(3, 800).unwrap().to_string(), "0.38");
}

#[test]
fn one_side_empty_scores_zero() {
    assert_eq!(
        similarity(&words(&[]), &words(&["a"])).unwrap(),
        Percentage::ZERO
    );
}

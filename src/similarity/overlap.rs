// Jaccard overlap between two symbol sets.
//
//   score = |A ∩ B| / |A ∪ B| * 100,   |A ∪ B| = |A| + |B| - |A ∩ B|
//
// Scores are reported in hundredths of a percent. Rounding is done in
// integer arithmetic, half-up on the exact ratio, so 66.666… is 66.67 and
// 0.125 is 0.13 regardless of float representation. A ratio just below 1
// that would round to 100.00 is held at 99.99: 100.00 means the two sets
// are identical.
//
// Two empty sets have no defined overlap. That is an error the caller must
// handle, not a zero.

use std::fmt;

use serde::Serialize;

use crate::text::symbols::{Symbol, SymbolSet};

const FULL_SCALE: u64 = 10_000;

/// Both symbol sets were empty, so the union is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedSimilarity;

impl fmt::Display for UndefinedSimilarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("similarity is undefined: neither corpus has any symbols")
    }
}

impl std::error::Error for UndefinedSimilarity {}

/// A similarity score with two decimal places, 0.00 to 100.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct Percentage {
    hundredths: u32,
}

impl Percentage {
    pub const ZERO: Percentage = Percentage { hundredths: 0 };
    pub const FULL: Percentage = Percentage {
        hundredths: FULL_SCALE as u32,
    };

    /// Score for `overlap` shared symbols out of `union` total distinct ones.
    ///
    /// Fails when `union` is zero. `overlap` is clamped to `union`.
    pub fn from_counts(overlap: usize, union: usize) -> Result<Self, UndefinedSimilarity> {
        if union == 0 {
            return Err(UndefinedSimilarity);
        }
        let union = union as u64;
        let overlap = (overlap as u64).min(union);

        // round(overlap / union * 10000), ties away from zero
        let mut hundredths = (overlap * 2 * FULL_SCALE + union) / (2 * union);
        if overlap < union && hundredths == FULL_SCALE {
            hundredths -= 1;
        }

        Ok(Self {
            hundredths: hundredths as u32,
        })
    }

    /// Build from a raw hundredths value (e.g. 3333 for 33.33%). Clamped to 100.00.
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self {
            hundredths: hundredths.min(FULL_SCALE as u32),
        }
    }

    pub fn hundredths(&self) -> u32 {
        self.hundredths
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> f64 {
        p.as_f64()
    }
}

/// Always two decimals, no percent sign: `33.33`, `0.00`, `100.00`.
impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

/// The counts behind a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub left: usize,
    pub right: usize,
    pub shared: usize,
}

impl Overlap {
    pub fn between<S: Symbol>(a: &SymbolSet<S>, b: &SymbolSet<S>) -> Self {
        Self {
            left: a.len(),
            right: b.len(),
            shared: a.intersection_len(b),
        }
    }

    pub fn union(&self) -> usize {
        self.left + self.right - self.shared
    }

    pub fn score(&self) -> Result<Percentage, UndefinedSimilarity> {
        Percentage::from_counts(self.shared, self.union())
    }
}

/// Jaccard similarity of two sets of the same symbol type, as a percentage.
pub fn similarity<S: Symbol>(
    a: &SymbolSet<S>,
    b: &SymbolSet<S>,
) -> Result<Percentage, UndefinedSimilarity> {
    Overlap::between(a, b).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::symbols::Word;

    fn set(words: &[&str]) -> SymbolSet<Word> {
        words.iter().map(|w| Word::from(*w)).collect()
    }

    #[test]
    fn test_one_third() {
        let score = similarity(&set(&["ab", "cd"]), &set(&["cd", "ef"])).unwrap();
        assert_eq!(score.hundredths(), 3333);
        assert_eq!(score.to_string(), "33.33");
    }

    #[test]
    fn test_two_thirds_rounds_up() {
        let score = Percentage::from_counts(2, 3).unwrap();
        assert_eq!(score.to_string(), "66.67");
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 1/800 = 0.125%
        assert_eq!(Percentage::from_counts(1, 800).unwrap().to_string(), "0.13");
        // 1/1600 = 0.0625% -> 0.06
        assert_eq!(Percentage::from_counts(1, 1600).unwrap().to_string(), "0.06");
    }

    #[test]
    fn test_near_full_is_capped() {
        let score = Percentage::from_counts(19_999, 20_000).unwrap();
        assert_eq!(score.to_string(), "99.99");
        assert_eq!(Percentage::from_counts(5, 5).unwrap(), Percentage::FULL);
    }

    #[test]
    fn test_empty_union_is_undefined() {
        assert_eq!(Percentage::from_counts(0, 0), Err(UndefinedSimilarity));
        assert_eq!(similarity(&set(&[]), &set(&[])), Err(UndefinedSimilarity));
    }

    #[test]
    fn test_one_side_empty_is_zero() {
        assert_eq!(similarity(&set(&["ab"]), &set(&[])), Ok(Percentage::ZERO));
    }

    #[test]
    fn test_overlap_counts() {
        let o = Overlap::between(&set(&["a", "b", "c"]), &set(&["b", "c", "d", "e"]));
        assert_eq!(o.shared, 2);
        assert_eq!(o.union(), 5);
        assert_eq!(o.score().unwrap().to_string(), "40.00");
    }

    #[test]
    fn test_display_and_f64() {
        let p = Percentage::from_hundredths(705);
        assert_eq!(p.to_string(), "7.05");
        assert!((p.as_f64() - 7.05).abs() < 1e-9);
        assert_eq!(Percentage::from_hundredths(20_000), Percentage::FULL);
    }
}

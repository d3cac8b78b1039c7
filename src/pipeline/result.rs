// ComparisonResult: everything one granularity's report needs.

use std::fmt;

use serde::Serialize;

use crate::similarity::overlap::{Overlap, Percentage, UndefinedSimilarity};
use crate::text::symbols::{FrequencyTable, Symbol, SymbolSet};

/// The unit of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Word,
    Phoneme,
}

impl Granularity {
    /// Plural noun used in report lines ("words", "phonemes").
    pub fn noun(&self) -> &'static str {
        match self {
            Granularity::Word => "words",
            Granularity::Phoneme => "phonemes",
        }
    }

    /// Fixed report file name.
    pub fn report_file_name(&self) -> &'static str {
        match self {
            Granularity::Word => "word_level_comparison_result.txt",
            Granularity::Phoneme => "phoneme_level_comparison_result.txt",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Word => f.write_str("Word"),
            Granularity::Phoneme => f.write_str("Phoneme"),
        }
    }
}

/// One corpus as seen by a comparison: its label, frequency table and the
/// distinct-key set extracted alongside it.
pub type Side<'a, S> = (&'a str, &'a FrequencyTable<S>, &'a SymbolSet<S>);

/// Size of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub label: String,
    /// Occurrences including repeats
    pub total: usize,
    /// Distinct symbols
    pub unique: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub granularity: Granularity,
    pub left: CorpusStats,
    pub right: CorpusStats,
    pub shared: usize,
    /// Shared symbols, sorted
    pub shared_symbols: Vec<String>,
    /// None when both sides are empty
    pub similarity: Option<Percentage>,
}

impl ComparisonResult {
    /// Compare two corpora at one granularity.
    pub fn compare<S: Symbol>(
        granularity: Granularity,
        left: Side<'_, S>,
        right: Side<'_, S>,
    ) -> Self {
        let (left_label, left_table, left_set) = left;
        let (right_label, right_table, right_set) = right;

        let overlap = Overlap::between(left_set, right_set);

        Self {
            granularity,
            left: CorpusStats {
                label: left_label.to_string(),
                total: left_table.total(),
                unique: overlap.left,
            },
            right: CorpusStats {
                label: right_label.to_string(),
                total: right_table.total(),
                unique: overlap.right,
            },
            shared: overlap.shared,
            shared_symbols: left_set
                .shared_with(right_set)
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            similarity: overlap.score().ok(),
        }
    }

    pub fn score(&self) -> Result<Percentage, UndefinedSimilarity> {
        self.similarity.ok_or(UndefinedSimilarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::symbols::{extract_words, Word};

    #[test]
    fn test_compare_words() {
        let (a, a_set) = extract_words("ab cd ab");
        let (b, b_set) = extract_words("cd ef");
        let result = ComparisonResult::compare(
            Granularity::Word,
            ("a.txt", &a, &a_set),
            ("b.txt", &b, &b_set),
        );

        assert_eq!(result.left.total, 3);
        assert_eq!(result.left.unique, 2);
        assert_eq!(result.right.total, 2);
        assert_eq!(result.shared, 1);
        assert_eq!(result.shared_symbols, vec!["cd"]);
        assert_eq!(result.score().unwrap().to_string(), "33.33");
    }

    #[test]
    fn test_compare_empty_is_undefined() {
        let empty: FrequencyTable<Word> = FrequencyTable::new();
        let none = empty.symbol_set();
        let result =
            ComparisonResult::compare(Granularity::Word, ("a", &empty, &none), ("b", &empty, &none));
        assert_eq!(result.similarity, None);
        assert_eq!(result.score(), Err(UndefinedSimilarity));
    }

    #[test]
    fn test_serializes_percentage_as_number() {
        let (a, set) = extract_words("x y");
        let result = ComparisonResult::compare(Granularity::Word, ("a", &a, &set), ("b", &a, &set));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["granularity"], "word");
        assert_eq!(json["similarity"], 100.0);
    }
}

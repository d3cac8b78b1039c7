// Frequency tables and symbol sets.
//
// Words and phonemes are both "symbols", but they are different types so a
// word set can never be compared against a phoneme set by accident. A
// FrequencyTable counts occurrences; its SymbolSet is the distinct-key view
// that the similarity engine consumes.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::text::normalize::is_separator;

/// Something that can be counted and compared across corpora.
pub trait Symbol: Clone + Eq + Hash + Ord + fmt::Display {
    fn as_str(&self) -> &str;
}

/// A whitespace-delimited token from cleaned text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

/// A single symbol emitted by a transcriber (e.g. "tʃʼ", "ə").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phoneme(String);

macro_rules! impl_symbol {
    ($ty:ident) => {
        impl $ty {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl Symbol for $ty {
            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

impl_symbol!(Word);
impl_symbol!(Phoneme);

/// Occurrence counts for one corpus at one granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: HashMap<S, usize>,
    total: usize,
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
        self.total += 1;
    }

    /// How many times `symbol` occurred (0 if never).
    pub fn count(&self, symbol: &S) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Total number of occurrences, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The distinct-key view.
    pub fn symbol_set(&self) -> SymbolSet<S> {
        SymbolSet(self.counts.keys().cloned().collect())
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.add(symbol);
        }
        table
    }
}

/// Unordered, duplicate-free symbols of one corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet<S: Symbol>(HashSet<S>);

impl<S: Symbol> Default for SymbolSet<S> {
    fn default() -> Self {
        Self(HashSet::new())
    }
}

impl<S: Symbol> SymbolSet<S> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.0.contains(symbol)
    }

    pub fn insert(&mut self, symbol: S) -> bool {
        self.0.insert(symbol)
    }

    /// Number of symbols present in both sets.
    pub fn intersection_len(&self, other: &SymbolSet<S>) -> usize {
        // Look up the smaller set in the larger one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().filter(|s| large.0.contains(*s)).count()
    }

    /// Shared symbols in sorted order, for reports.
    pub fn shared_with(&self, other: &SymbolSet<S>) -> BTreeSet<S> {
        self.0.intersection(&other.0).cloned().collect()
    }
}

impl<S: Symbol> FromIterator<S> for SymbolSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Split cleaned text into word tokens. Runs of separators count as one
/// break and never produce empty tokens.
pub fn tokenize(cleaned: &str) -> impl Iterator<Item = Word> + '_ {
    cleaned
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(Word::from)
}

/// Word-level extraction: frequency table plus its distinct-key view.
pub fn extract_words(cleaned: &str) -> (FrequencyTable<Word>, SymbolSet<Word>) {
    let table: FrequencyTable<Word> = tokenize(cleaned).collect();
    let set = table.symbol_set();
    (table, set)
}

/// Phoneme-level extraction over a transcriber's symbol stream.
pub fn extract_phonemes(phonemes: &[Phoneme]) -> (FrequencyTable<Phoneme>, SymbolSet<Phoneme>) {
    let table: FrequencyTable<Phoneme> = phonemes.iter().cloned().collect();
    let set = table.symbol_set();
    (table, set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words_counts_repeats() {
        let (table, set) = extract_words("ab cd ab");
        assert_eq!(table.total(), 3);
        assert_eq!(table.unique(), 2);
        assert_eq!(table.count(&Word::from("ab")), 2);
        assert_eq!(table.count(&Word::from("cd")), 1);
        assert_eq!(table.count(&Word::from("zz")), 0);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Word::from("ab")));
    }

    #[test]
    fn test_whitespace_runs_produce_no_empty_tokens() {
        let (table, _) = extract_words("  ab \n\n\t cd   ");
        assert_eq!(table.total(), 2);
        assert!(!table.symbol_set().contains(&Word::from("")));
    }

    #[test]
    fn test_empty_input() {
        let (table, set) = extract_words("");
        assert!(table.is_empty());
        assert!(set.is_empty());

        let (table, set) = extract_phonemes(&[]);
        assert_eq!(table.total(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_extract_phonemes() {
        let stream: Vec<Phoneme> = ["s", "ə", "l", "a", "m", "ə"]
            .into_iter()
            .map(Phoneme::from)
            .collect();
        let (table, set) = extract_phonemes(&stream);
        assert_eq!(table.total(), 6);
        assert_eq!(table.count(&Phoneme::from("ə")), 2);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_information_separators_split_words() {
        let (table, _) = extract_words("ሀ\u{1c}ለ\u{1e}\u{1f}መ");
        assert_eq!(table.total(), 3);
        assert_eq!(table.count(&Word::from("ለ")), 1);
    }

    #[test]
    fn test_intersection_and_shared() {
        let a: SymbolSet<Word> = ["ab", "cd"].into_iter().map(Word::from).collect();
        let b: SymbolSet<Word> = ["cd", "ef", "gh"].into_iter().map(Word::from).collect();
        assert_eq!(a.intersection_len(&b), 1);
        assert_eq!(b.intersection_len(&a), 1);
        let shared: Vec<String> = a.shared_with(&b).iter().map(|w| w.to_string()).collect();
        assert_eq!(shared, vec!["cd"]);
    }
}

// Grapheme-to-phoneme mapping tables.
//
// A table maps a grapheme string (usually one Ethiopic syllable, but any
// number of characters is allowed) to the ordered phoneme symbols it stands
// for. The built-in table is generated from the regular layout of the
// Ethiopic block: each consonant row holds eight code points, one per vowel
// order, so a row base plus an order offset gives the syllable.
//
// Table file format, one entry per line:
//
//   ሰ<TAB>s ə
//   ሿ<TAB>ʃ w a
//
// Blank lines and lines starting with '#' are ignored.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::text::normalize::is_separator;
use crate::text::symbols::{Phoneme, Symbol};

/// Vowel for each of the seven basic orders. The sixth order is the bare
/// consonant.
const VOWEL_ORDERS: [Option<&str>; 7] = [
    Some("ə"),
    Some("u"),
    Some("i"),
    Some("a"),
    Some("e"),
    None,
    Some("o"),
];

/// (row base, consonant phoneme, has labialized eighth order `Cʷa`)
const CONSONANT_ROWS: &[(u32, &str, bool)] = &[
    (0x1200, "h", false),  // ሀ
    (0x1208, "l", true),   // ለ
    (0x1210, "ħ", true),   // ሐ
    (0x1218, "m", true),   // መ
    (0x1220, "s", true),   // ሠ
    (0x1228, "r", true),   // ረ
    (0x1230, "s", true),   // ሰ
    (0x1238, "ʃ", true),   // ሸ
    (0x1240, "q", false),  // ቀ
    (0x1250, "qʰ", false), // ቐ
    (0x1260, "b", true),   // በ
    (0x1268, "v", true),   // ቨ
    (0x1270, "t", true),   // ተ
    (0x1278, "tʃ", true),  // ቸ
    (0x1280, "h", false),  // ኀ
    (0x1290, "n", true),   // ነ
    (0x1298, "ɲ", true),   // ኘ
    (0x12A0, "ʔ", true),   // አ
    (0x12A8, "k", false),  // ከ
    (0x12B8, "x", false),  // ኸ
    (0x12C8, "w", false),  // ወ
    (0x12D0, "ʕ", false),  // ዐ
    (0x12D8, "z", true),   // ዘ
    (0x12E0, "ʒ", true),   // ዠ
    (0x12E8, "j", false),  // የ
    (0x12F0, "d", true),   // ደ
    (0x1300, "dʒ", true),  // ጀ
    (0x1308, "g", false),  // ገ
    (0x1320, "tʼ", true),  // ጠ
    (0x1328, "tʃʼ", true), // ጨ
    (0x1330, "pʼ", true),  // ጰ
    (0x1338, "sʼ", true),  // ጸ
    (0x1340, "sʼ", false), // ፀ
    (0x1348, "f", true),   // ፈ
    (0x1350, "p", true),   // ፐ
];

/// Labiovelar rows (ቈ ቘ ኈ ኰ ዀ ጐ). Only five slots are assigned:
/// offsets 0, 2, 3, 4 and 5.
const LABIOVELAR_ROWS: &[(u32, &str)] = &[
    (0x1248, "q"),
    (0x1258, "qʰ"),
    (0x1288, "h"),
    (0x12B0, "k"),
    (0x12C0, "x"),
    (0x1310, "g"),
];

const LABIOVELAR_ORDERS: [(u32, Option<&str>); 5] = [
    (0, Some("ə")),
    (2, Some("i")),
    (3, Some("a")),
    (4, Some("e")),
    (5, None),
];

/// A malformed line in a mapping table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No tab separating grapheme from phonemes.
    MissingSeparator { line: usize },
    /// Grapheme column is empty or contains whitespace.
    InvalidGrapheme { line: usize },
    /// Phoneme column is empty.
    MissingPhonemes { line: usize },
    /// The same grapheme appears twice.
    Duplicate { line: usize, grapheme: String },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::MissingSeparator { line } => {
                write!(f, "line {line}: expected <grapheme>TAB<phonemes>")
            }
            MappingError::InvalidGrapheme { line } => {
                write!(f, "line {line}: grapheme must be non-empty and contain no whitespace")
            }
            MappingError::MissingPhonemes { line } => {
                write!(f, "line {line}: no phonemes after the tab")
            }
            MappingError::Duplicate { line, grapheme } => {
                write!(f, "line {line}: grapheme {grapheme:?} is already mapped")
            }
        }
    }
}

impl std::error::Error for MappingError {}

/// Grapheme → phoneme sequence lookup used by the transcriber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<String, Vec<Phoneme>>,
    /// Length in chars of the longest grapheme key.
    max_key_chars: usize,
}

impl MappingTable {
    /// The built-in Ethiopic table used for Amharic and Tigrinya.
    pub fn ethiopic() -> Self {
        let mut table = Self::default();

        for &(base, consonant, labialized) in CONSONANT_ROWS {
            for (order, vowel) in VOWEL_ORDERS.iter().enumerate() {
                table.insert_syllable(base + order as u32, &[Some(consonant), *vowel]);
            }
            if labialized {
                table.insert_syllable(base + 7, &[Some(consonant), Some("w"), Some("a")]);
            }
        }

        for &(base, consonant) in LABIOVELAR_ROWS {
            for (offset, vowel) in LABIOVELAR_ORDERS {
                table.insert_syllable(base + offset, &[Some(consonant), Some("w"), vowel]);
            }
        }

        table
    }

    fn insert_syllable(&mut self, code_point: u32, parts: &[Option<&str>]) {
        // Every code point in the row tables is an assigned Ethiopic syllable
        let Some(grapheme) = char::from_u32(code_point) else {
            return;
        };
        let phonemes = parts.iter().flatten().map(|p| Phoneme::from(*p)).collect();
        self.insert(grapheme.to_string(), phonemes);
    }

    /// Build a table from literal pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<'a, I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, P)>,
        P: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for (grapheme, phonemes) in pairs {
            table.insert(
                grapheme.to_string(),
                phonemes.into_iter().map(Phoneme::from).collect(),
            );
        }
        table
    }

    /// Parse a table from its file format.
    pub fn parse(text: &str) -> Result<Self, MappingError> {
        let mut table = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
                continue;
            }

            let (grapheme, phonemes) = raw
                .split_once('\t')
                .ok_or(MappingError::MissingSeparator { line })?;

            if grapheme.is_empty() || grapheme.chars().any(is_separator) {
                return Err(MappingError::InvalidGrapheme { line });
            }

            let phonemes: Vec<Phoneme> = phonemes.split_whitespace().map(Phoneme::from).collect();
            if phonemes.is_empty() {
                return Err(MappingError::MissingPhonemes { line });
            }

            if table.entries.contains_key(grapheme) {
                return Err(MappingError::Duplicate {
                    line,
                    grapheme: grapheme.to_string(),
                });
            }
            table.insert(grapheme.to_string(), phonemes);
        }

        Ok(table)
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping table {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Invalid mapping table {}", path.display()))
    }

    fn insert(&mut self, grapheme: String, phonemes: Vec<Phoneme>) {
        self.max_key_chars = self.max_key_chars.max(grapheme.chars().count());
        self.entries.insert(grapheme, phonemes);
    }

    pub fn get(&self, grapheme: &str) -> Option<&[Phoneme]> {
        self.entries.get(grapheme).map(Vec::as_slice)
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat grapheme → phoneme-string view (phonemes concatenated).
    pub fn to_string_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(g, ps)| (g.clone(), ps.iter().map(Symbol::as_str).collect()))
            .collect()
    }

    /// Render in the table file format, sorted by grapheme.
    pub fn to_table_text(&self) -> String {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        let mut out = String::new();
        for key in keys {
            let phonemes: Vec<&str> = self.entries[key].iter().map(Symbol::as_str).collect();
            out.push_str(key);
            out.push('\t');
            out.push_str(&phonemes.join(" "));
            out.push('\n');
        }
        out
    }
}

/// The table used when no table file is configured.
pub fn load_mapping_table() -> MappingTable {
    MappingTable::ethiopic()
}

// Table-driven transcription with greedy longest match.
//
// At each position the longest grapheme key in the table that matches wins.
// Characters with no entry are copied through and counted as a phoneme of
// their own, so nothing in the input disappears silently.

use super::table::MappingTable;
use super::traits::{Transcriber, Transcription};
use crate::text::normalize::is_separator;
use crate::text::symbols::{Phoneme, Symbol};

/// Default transcriber: owns a mapping table and matches longest-first.
#[derive(Debug, Clone)]
pub struct TableTranscriber {
    table: MappingTable,
}

impl TableTranscriber {
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }
}

impl Default for TableTranscriber {
    fn default() -> Self {
        Self::new(MappingTable::ethiopic())
    }
}

impl Transcriber for TableTranscriber {
    fn transcribe(&self, text: &str) -> Transcription {
        transcribe_with(&self.table, text)
    }
}

/// Transcribe `text` against `table`, returning text and symbol stream.
pub fn transcribe_with(table: &MappingTable, text: &str) -> Transcription {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Transcription {
        text: String::with_capacity(text.len()),
        phonemes: Vec::with_capacity(chars.len() * 2),
    };
    let mut key = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_separator(c) {
            out.text.push(c);
            i += 1;
            continue;
        }

        // Keys never contain whitespace, so a match can't span a word break
        let window = chars[i..]
            .iter()
            .take(table.max_key_chars())
            .take_while(|&&ch| !is_separator(ch))
            .count();

        let mut matched = 0;
        for len in (1..=window).rev() {
            key.clear();
            key.extend(&chars[i..i + len]);
            if let Some(phonemes) = table.get(&key) {
                for phoneme in phonemes {
                    out.text.push_str(phoneme.as_str());
                    out.phonemes.push(phoneme.clone());
                }
                matched = len;
                break;
            }
        }

        if matched == 0 {
            out.text.push(c);
            out.phonemes.push(Phoneme::new(c.to_string()));
            matched = 1;
        }
        i += matched;
    }

    out
}

/// String-only form: the phoneme stream as text.
pub fn transcribe(text: &str, table: &MappingTable) -> String {
    transcribe_with(table, text).text
}

// One prepared corpus: cleaned once, then tokenized and transcribed from the
// same cleaned text.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::phonemes::traits::{Transcriber, Transcription};
use crate::text::normalize::Normalizer;
use crate::text::symbols::{
    extract_phonemes, extract_words, FrequencyTable, Phoneme, SymbolSet, Word,
};

#[derive(Debug, Clone)]
pub struct Corpus {
    /// Display name used in reports (the path as given)
    pub label: String,
    pub path: PathBuf,
    pub cleaned: String,
    pub words: FrequencyTable<Word>,
    pub word_set: SymbolSet<Word>,
    pub transcription: Transcription,
    pub phonemes: FrequencyTable<Phoneme>,
    pub phoneme_set: SymbolSet<Phoneme>,
}

impl Corpus {
    /// Clean `raw`, then derive both granularities from the cleaned text.
    pub fn prepare(
        path: &Path,
        raw: &str,
        normalizer: &Normalizer,
        transcriber: &dyn Transcriber,
    ) -> Self {
        let cleaned = normalizer.normalize(raw);
        let (words, word_set) = extract_words(&cleaned);
        let transcription = transcriber.transcribe(&cleaned);
        let (phonemes, phoneme_set) = extract_phonemes(&transcription.phonemes);

        debug!(
            corpus = %path.display(),
            raw_chars = raw.chars().count(),
            cleaned_chars = cleaned.chars().count(),
            words = words.total(),
            phonemes = phonemes.total(),
            "Prepared corpus"
        );

        Self {
            label: path.display().to_string(),
            path: path.to_path_buf(),
            cleaned,
            words,
            word_set,
            transcription,
            phonemes,
            phoneme_set,
        }
    }
}

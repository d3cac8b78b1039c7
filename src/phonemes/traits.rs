// Transcriber trait: swap-ready abstraction.
//
// The pipeline only needs "cleaned text in, phoneme stream out". The default
// implementation is table-driven; tests inject small stub tables, and a
// rule-based or dictionary-based engine could replace it without touching
// the comparison code.

use crate::text::symbols::Phoneme;

/// Output of transcribing one corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcription {
    /// The phoneme stream as text, with the input's whitespace copied through.
    pub text: String,
    /// The ordered phoneme symbols. Whitespace is not a phoneme.
    pub phonemes: Vec<Phoneme>,
}

/// Pure, deterministic grapheme-to-phoneme conversion.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, text: &str) -> Transcription;
}

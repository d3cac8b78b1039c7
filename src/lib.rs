// Fidel: word- and phoneme-level overlap between two Ethiopic-script corpora
//
// This is the library root. Each module corresponds to one stage of the
// comparison pipeline.

pub mod config;
pub mod error;
pub mod output;
pub mod phonemes;
pub mod pipeline;
pub mod similarity;
pub mod text;

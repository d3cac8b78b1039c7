// Grapheme-to-phoneme transcription: mapping tables and the transcriber.

pub mod table;
pub mod traits;
pub mod transcriber;

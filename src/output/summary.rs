// Machine-readable run summary (comparison_summary.json).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::result::ComparisonResult;

pub const SUMMARY_FILE_NAME: &str = "comparison_summary.json";

#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub generated_at: DateTime<Utc>,
    pub alphabet: String,
    pub word: &'a ComparisonResult,
    pub phoneme: &'a ComparisonResult,
}

impl<'a> RunSummary<'a> {
    pub fn new(alphabet: String, word: &'a ComparisonResult, phoneme: &'a ComparisonResult) -> Self {
        Self {
            generated_at: Utc::now(),
            alphabet,
            word,
            phoneme,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Plain-text comparison reports and the per-corpus artifact files.
//
// Every write goes through `write_file`, which creates the parent directory
// first and turns any I/O failure into an OutputWriteFailure naming the path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::PipelineError;
use crate::pipeline::result::{ComparisonResult, Granularity};

pub const CLEANED_PREFIX: &str = "cleaned_";
pub const PHONEME_PREFIX: &str = "phonemes_";

const RULE: &str = "------------------------";

/// `<dir>/<prefix><file name of input>`.
pub fn artifact_path(dir: &Path, prefix: &str, input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .with_context(|| format!("Corpus path has no file name: {}", input.display()))?;
    Ok(dir.join(format!("{prefix}{}", name.to_string_lossy())))
}

/// Render one granularity's report.
pub fn render_report(result: &ComparisonResult) -> String {
    let noun = result.granularity.noun();
    let mut out = String::new();

    out.push_str(&format!("{}-Level Comparison\n", result.granularity));
    out.push_str(RULE);
    out.push('\n');

    for side in [&result.left, &result.right] {
        out.push_str(&format!("Total {noun} in {}: {}\n", side.label, side.total));
    }
    for side in [&result.left, &result.right] {
        out.push_str(&format!("Unique {noun} in {}: {}\n", side.label, side.unique));
    }
    out.push_str(&format!("Number of common {noun}: {}\n", result.shared));

    if result.granularity == Granularity::Word {
        out.push_str("Common words:\n");
        out.push_str(&format_word_set(&result.shared_symbols));
        out.push('\n');
    }

    match result.score() {
        Ok(score) => out.push_str(&format!("{}-level similarity: {score}%\n", result.granularity)),
        Err(_) => out.push_str(&format!(
            "{}-level similarity: undefined (no {noun} in either corpus)\n",
            result.granularity
        )),
    }

    out
}

/// Shared words as `{'a', 'b'}`, or `set()` when there are none. Existing
/// report readers expect this exact form.
fn format_word_set(words: &[String]) -> String {
    if words.is_empty() {
        return "set()".to_string();
    }
    let quoted: Vec<String> = words.iter().map(|w| quote_word(w)).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Single quotes unless the word holds a single quote and no double quote.
fn quote_word(word: &str) -> String {
    if word.contains('\'') && !word.contains('"') {
        return format!("\"{}\"", word.replace('\\', "\\\\"));
    }
    let mut out = String::with_capacity(word.len() + 2);
    out.push('\'');
    for c in word.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Write `contents` to `path`, creating the parent directory if needed.
pub async fn write_file(path: &Path, contents: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| PipelineError::OutputWriteFailure {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PipelineError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        })
}

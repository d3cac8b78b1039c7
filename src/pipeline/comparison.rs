// Corpus comparison pipeline: read -> clean -> {words, phonemes} -> overlap.
//
// 1. Read both corpora concurrently. A failure on either side aborts the
//    run before anything is written.
// 2. Prepare each corpus on a blocking worker: clean once, then tokenize and
//    transcribe from that single cleaned text.
// 3. Compare word sets and phoneme sets.
// 4. Write cleaned text, phoneme streams, both reports, and optionally the
//    JSON summary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::corpus::Corpus;
use super::result::{ComparisonResult, Granularity};
use crate::config::Config;
use crate::error::PipelineError;
use crate::output::report::{self, CLEANED_PREFIX, PHONEME_PREFIX};
use crate::output::summary::{RunSummary, SUMMARY_FILE_NAME};
use crate::phonemes::traits::Transcriber;
use crate::text::normalize::Normalizer;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub word: ComparisonResult,
    pub phoneme: ComparisonResult,
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
}

/// Run the full two-corpus comparison described by `config`.
pub async fn run(config: &Config, transcriber: Arc<dyn Transcriber>) -> Result<RunOutcome> {
    config.require_inputs()?;

    let (raw_a, raw_b) =
        tokio::try_join!(read_corpus(&config.corpus_a), read_corpus(&config.corpus_b))?;

    let normalizer = Normalizer::new(config.alphabet);
    let (corpus_a, corpus_b) = tokio::try_join!(
        prepare(config.corpus_a.clone(), raw_a, normalizer, Arc::clone(&transcriber)),
        prepare(config.corpus_b.clone(), raw_b, normalizer, Arc::clone(&transcriber))
    )?;

    let (word, phoneme) = compare(&corpus_a, &corpus_b);

    for result in [&word, &phoneme] {
        match result.score() {
            Ok(score) => info!(
                granularity = %result.granularity,
                shared = result.shared,
                left_unique = result.left.unique,
                right_unique = result.right.unique,
                similarity = %score,
                "Comparison complete"
            ),
            Err(e) => warn!(granularity = %result.granularity, "{e}"),
        }
    }

    let mut written = Vec::new();

    for corpus in [&corpus_a, &corpus_b] {
        let cleaned_path = report::artifact_path(&config.cleaned_dir, CLEANED_PREFIX, &corpus.path)?;
        // A corpus compared with itself has one set of artifacts
        if written.contains(&cleaned_path) {
            continue;
        }
        report::write_file(&cleaned_path, &corpus.cleaned).await?;
        written.push(cleaned_path);

        let phoneme_path =
            report::artifact_path(&config.phoneme_dir, PHONEME_PREFIX, &corpus.path)?;
        report::write_file(&phoneme_path, &corpus.transcription.text).await?;
        written.push(phoneme_path);
    }

    for result in [&word, &phoneme] {
        let path = config.report_dir.join(result.granularity.report_file_name());
        report::write_file(&path, &report::render_report(result)).await?;
        written.push(path);
    }

    if config.write_summary {
        let path = config.report_dir.join(SUMMARY_FILE_NAME);
        let json = RunSummary::new(config.alphabet.to_string(), &word, &phoneme)
            .to_json()
            .context("Failed to serialize run summary")?;
        report::write_file(&path, &json).await?;
        written.push(path);
    }

    info!(files = written.len(), "Outputs written");

    Ok(RunOutcome {
        word,
        phoneme,
        written,
    })
}

/// Compare two prepared corpora at both granularities.
pub fn compare(a: &Corpus, b: &Corpus) -> (ComparisonResult, ComparisonResult) {
    let word = ComparisonResult::compare(
        Granularity::Word,
        (a.label.as_str(), &a.words, &a.word_set),
        (b.label.as_str(), &b.words, &b.word_set),
    );
    let phoneme = ComparisonResult::compare(
        Granularity::Phoneme,
        (a.label.as_str(), &a.phonemes, &a.phoneme_set),
        (b.label.as_str(), &b.phonemes, &b.phoneme_set),
    );
    (word, phoneme)
}

/// Read one corpus as UTF-8. Missing files, permission errors, and invalid
/// encodings all surface as InputUnavailable.
pub async fn read_corpus(path: &Path) -> Result<String, PipelineError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PipelineError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    info!(corpus = %path.display(), bytes = text.len(), "Read corpus");
    Ok(text)
}

/// Prepare a corpus off the async runtime; cleaning and transcription are
/// CPU-bound.
async fn prepare(
    path: PathBuf,
    raw: String,
    normalizer: Normalizer,
    transcriber: Arc<dyn Transcriber>,
) -> Result<Corpus> {
    tokio::task::spawn_blocking(move || {
        Corpus::prepare(&path, &raw, &normalizer, transcriber.as_ref())
    })
    .await
    .context("Corpus preparation task panicked")
}

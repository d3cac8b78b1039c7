use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::phonemes::table::MappingTable;
use crate::phonemes::transcriber::TableTranscriber;
use crate::text::normalize::Alphabet;

pub const DEFAULT_CORPUS_A: &str = "amharic1.txt";
pub const DEFAULT_CORPUS_B: &str = "tigrigna1.txt";
pub const DEFAULT_CLEANED_DIR: &str = "cleaned_text";
pub const DEFAULT_PHONEME_DIR: &str = "text_in_phoneme";
pub const DEFAULT_REPORT_DIR: &str = ".";

/// Everything a comparison run needs: inputs, output locations, and the
/// alphabet/mapping that define cleaning and transcription.
///
/// Values come from environment variables (a .env file is loaded at
/// startup via dotenvy); CLI flags override them in main.rs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub corpus_a: PathBuf,
    pub corpus_b: PathBuf,
    /// Where `cleaned_<name>` files go (FIDEL_CLEANED_DIR)
    pub cleaned_dir: PathBuf,
    /// Where `phonemes_<name>` files go (FIDEL_PHONEME_DIR)
    pub phoneme_dir: PathBuf,
    /// Where the two comparison reports go (FIDEL_REPORT_DIR)
    pub report_dir: PathBuf,
    /// Mapping table file; the built-in Ethiopic table when unset (FIDEL_MAPPING)
    pub mapping_path: Option<PathBuf>,
    /// Characters kept by the normalizer (FIDEL_ALPHABET, e.g. "1200-135A")
    pub alphabet: Alphabet,
    /// Also write comparison_summary.json (FIDEL_SUMMARY=1)
    pub write_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_a: PathBuf::from(DEFAULT_CORPUS_A),
            corpus_b: PathBuf::from(DEFAULT_CORPUS_B),
            cleaned_dir: PathBuf::from(DEFAULT_CLEANED_DIR),
            phoneme_dir: PathBuf::from(DEFAULT_PHONEME_DIR),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            mapping_path: None,
            alphabet: Alphabet::ETHIOPIC,
            write_summary: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from any variable lookup. Unset or empty variables
    /// fall back to defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let alphabet = match get("FIDEL_ALPHABET") {
            Some(raw) => raw
                .parse::<Alphabet>()
                .with_context(|| format!("FIDEL_ALPHABET is not a valid range: {raw}"))?,
            None => defaults.alphabet,
        };

        let write_summary = matches!(
            get("FIDEL_SUMMARY").as_deref().map(str::trim),
            Some("1" | "true" | "yes")
        );

        Ok(Self {
            corpus_a: get("FIDEL_CORPUS_A").map(PathBuf::from).unwrap_or(defaults.corpus_a),
            corpus_b: get("FIDEL_CORPUS_B").map(PathBuf::from).unwrap_or(defaults.corpus_b),
            cleaned_dir: get("FIDEL_CLEANED_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cleaned_dir),
            phoneme_dir: get("FIDEL_PHONEME_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.phoneme_dir),
            report_dir: get("FIDEL_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
            mapping_path: get("FIDEL_MAPPING").map(PathBuf::from),
            alphabet,
            write_summary,
        })
    }

    /// Check that both corpora are named and won't overwrite each other's
    /// output files. Output names are built from the file name alone, so two
    /// inputs called `text.txt` in different directories would collide.
    /// Comparing a file with itself is allowed.
    pub fn require_inputs(&self) -> Result<()> {
        let name_a = self.corpus_a.file_name().with_context(|| {
            format!("Corpus A path has no file name: {:?}", self.corpus_a)
        })?;
        let name_b = self.corpus_b.file_name().with_context(|| {
            format!("Corpus B path has no file name: {:?}", self.corpus_b)
        })?;

        if name_a == name_b && !same_file(&self.corpus_a, &self.corpus_b) {
            anyhow::bail!(
                "Both corpora are named {:?}; their cleaned and phoneme files would overwrite \
                 each other. Rename one of them.",
                name_a
            );
        }
        Ok(())
    }

    /// Build the transcriber from the configured table file, or the
    /// built-in Ethiopic table.
    pub fn transcriber(&self) -> Result<TableTranscriber> {
        let table = match &self.mapping_path {
            Some(path) => MappingTable::load(path)?,
            None => MappingTable::ethiopic(),
        };
        info!(
            entries = table.len(),
            source = self
                .mapping_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()),
            "Loaded mapping table"
        );
        Ok(TableTranscriber::new(table))
    }
}

/// Same path as given, or the same file once both are resolved.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

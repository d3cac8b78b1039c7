use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use fidel::config::Config;
use fidel::phonemes::traits::Transcriber;
use fidel::text::normalize::Normalizer;

/// Fidel: word- and phoneme-level overlap between two Ethiopic-script corpora.
///
/// Cleans both corpora down to the Ethiopic syllabary, transcribes them to
/// phonemes, and reports how much vocabulary and sound inventory they share.
#[derive(Parser)]
#[command(name = "fidel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two corpora and write cleaned text, phoneme files, and reports
    Compare {
        /// First corpus (default: FIDEL_CORPUS_A or amharic1.txt)
        corpus_a: Option<PathBuf>,

        /// Second corpus (default: FIDEL_CORPUS_B or tigrigna1.txt)
        corpus_b: Option<PathBuf>,

        /// Directory for cleaned_<name> files
        #[arg(long)]
        cleaned_dir: Option<PathBuf>,

        /// Directory for phonemes_<name> files
        #[arg(long)]
        phoneme_dir: Option<PathBuf>,

        /// Directory for the two comparison reports
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Mapping table file (grapheme<TAB>phonemes per line)
        #[arg(long)]
        mapping: Option<PathBuf>,

        /// Also write comparison_summary.json
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned text of one file
    Clean {
        /// File to clean
        file: PathBuf,
    },

    /// Print the phoneme stream of one file (cleaned first)
    Transcribe {
        /// File to transcribe
        file: PathBuf,

        /// Mapping table file (default: built-in Ethiopic table)
        #[arg(long)]
        mapping: Option<PathBuf>,
    },

    /// Print the active mapping table in table file format
    Mapping {
        /// Mapping table file (default: built-in Ethiopic table)
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging (stderr, so `clean`/`transcribe` output stays pipeable)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fidel=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            corpus_a,
            corpus_b,
            cleaned_dir,
            phoneme_dir,
            report_dir,
            mapping,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(path) = corpus_a {
                config.corpus_a = path;
            }
            if let Some(path) = corpus_b {
                config.corpus_b = path;
            }
            if let Some(dir) = cleaned_dir {
                config.cleaned_dir = dir;
            }
            if let Some(dir) = phoneme_dir {
                config.phoneme_dir = dir;
            }
            if let Some(dir) = report_dir {
                config.report_dir = dir;
            }
            if mapping.is_some() {
                config.mapping_path = mapping;
            }
            config.write_summary |= json;

            info!(
                corpus_a = %config.corpus_a.display(),
                corpus_b = %config.corpus_b.display(),
                alphabet = %config.alphabet,
                "Starting comparison"
            );

            let transcriber: Arc<dyn Transcriber> = Arc::new(config.transcriber()?);
            let outcome = fidel::pipeline::comparison::run(&config, transcriber).await?;

            fidel::output::terminal::display_outcome(&outcome);
            println!(
                "\n{}",
                format!("Reports saved to: {}", config.report_dir.display()).bold()
            );
        }

        Commands::Clean { file } => {
            let config = Config::load()?;
            let raw = fidel::pipeline::comparison::read_corpus(&file).await?;
            print!("{}", Normalizer::new(config.alphabet).normalize(&raw));
        }

        Commands::Transcribe { file, mapping } => {
            let mut config = Config::load()?;
            if mapping.is_some() {
                config.mapping_path = mapping;
            }
            let transcriber = config.transcriber()?;
            let raw = fidel::pipeline::comparison::read_corpus(&file).await?;
            let cleaned = Normalizer::new(config.alphabet).normalize(&raw);
            print!("{}", transcriber.transcribe(&cleaned).text);
        }

        Commands::Mapping { mapping } => {
            let mut config = Config::load()?;
            if mapping.is_some() {
                config.mapping_path = mapping;
            }
            let transcriber = config.transcriber()?;
            print!("{}", transcriber.table().to_table_text());
        }
    }

    Ok(())
}

// Colored terminal output for a finished comparison run.

use colored::Colorize;

use crate::pipeline::comparison::RunOutcome;
use crate::pipeline::result::ComparisonResult;

/// Print the run summary: corpus sizes, both scores, and written files.
pub fn display_outcome(outcome: &RunOutcome) {
    println!("\n{}", "=== Corpus Overlap ===".bold());
    println!();

    for side in [&outcome.word.left, &outcome.word.right] {
        println!("  Total words in {}: {}", side.label, side.total);
    }
    println!();

    display_score("Word-level overlap", &outcome.word);
    display_score("Phoneme-level overlap", &outcome.phoneme);

    if !outcome.written.is_empty() {
        println!("\n{}", "Files written:".dimmed());
        for path in &outcome.written {
            println!("  {}", path.display().to_string().dimmed());
        }
    }
}

fn display_score(title: &str, result: &ComparisonResult) {
    match result.score() {
        Ok(score) => {
            let text = format!("{score}%");
            let painted = if score.as_f64() >= 50.0 {
                text.bright_green()
            } else if score.as_f64() >= 20.0 {
                text.bright_yellow()
            } else {
                text.bright_blue()
            };
            println!(
                "  {:<24} {}  ({} shared of {} + {} unique)",
                title,
                painted.bold(),
                result.shared,
                result.left.unique,
                result.right.unique,
            );
        }
        Err(_) => {
            println!(
                "  {:<24} {}  (no {} in either corpus)",
                title,
                "undefined".yellow(),
                result.granularity.noun(),
            );
        }
    }
}

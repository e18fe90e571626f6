//! Stats command — text statistics without scores.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use readability_core::TextAnalysis;

use super::read_input_file;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Print the text and its character, word, sentence, and syllable counts.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let analysis = TextAnalysis::new(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analysis.to_report(None))?);
    } else {
        print!("{}", analysis.statistics());
    }

    Ok(())
}

//! Analyze command — text statistics plus readability scores.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument, warn};

use readability_core::{ScoreResult, ScoreSelector, TextAnalysis, format_score};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Scores to compute. Asked on stdin when neither this nor config sets one.
    #[arg(short, long, value_enum)]
    pub score: Option<ScoreSelector>,
}

/// Print statistics for a file, then the requested readability scores.
///
/// With `--json` and no selector, all four scores are emitted.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_score: Option<ScoreSelector>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, score = ?args.score, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let analysis = TextAnalysis::new(&content);
    let selector = args.score.or(config_score);

    if global_json {
        let report = analysis.to_report(Some(selector.unwrap_or(ScoreSelector::All)));
        warn_undefined(&report.scores);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", analysis.statistics());

    let selector = match selector {
        Some(selector) => selector,
        None => prompt_selector(&mut io::stdin().lock(), &mut io::stdout().lock())?,
    };

    let results = analysis.scores(selector);
    warn_undefined(&results);
    for result in &results {
        println!("{}", format_score(result.kind, result));
    }

    Ok(())
}

/// Ask for a score selector until a valid one is entered.
///
/// Lines are matched exactly (`ARI`, `FK`, `SMOG`, `CL`, `all`) after the
/// line terminator is removed. Fails if input ends first.
pub fn prompt_selector<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<ScoreSelector> {
    writeln!(
        output,
        "Enter the score you want to calculate ({}):",
        ScoreSelector::NAMES.join(", ")
    )?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read score type")?;
        if read == 0 {
            bail!("no score type given before end of input");
        }

        match line.trim_end_matches(['\r', '\n']).parse::<ScoreSelector>() {
            Ok(selector) => return Ok(selector),
            Err(err) => {
                debug!(error = %err, "rejected score type");
                writeln!(
                    output,
                    "{}",
                    "Wrong input. Try again:".if_supports_color(Stream::Stdout, |t| t.yellow())
                )?;
                output.flush()?;
            }
        }
    }
}

fn warn_undefined(results: &[ScoreResult]) {
    for result in results.iter().filter(|r| !r.is_defined()) {
        warn!(
            score = %result.kind,
            value = result.value,
            "score undefined: text has no words or no sentences"
        );
    }
}

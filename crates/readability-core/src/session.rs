//! A text paired with its cached counts.

use crate::report::{self, Analysis};
use crate::scores::{self, ScoreKind, ScoreResult, ScoreSelector};
use crate::statistics::{self, Counts};

/// Analysis of a single text.
///
/// Counts are computed once at construction; scores are computed on demand
/// from those counts and never cached.
#[derive(Debug, Clone)]
pub struct TextAnalysis<'a> {
    text: &'a str,
    counts: Counts,
}

impl<'a> TextAnalysis<'a> {
    /// Analyze `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            counts: statistics::analyze(text),
        }
    }

    /// The analyzed text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The cached counts.
    pub const fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Compute one index.
    pub fn score(&self, kind: ScoreKind) -> ScoreResult {
        scores::score(&self.counts, kind)
    }

    /// Compute every index covered by `selector`.
    pub fn scores(&self, selector: ScoreSelector) -> Vec<ScoreResult> {
        scores::scores(&self.counts, selector)
    }

    /// The statistics report for this text.
    pub fn statistics(&self) -> String {
        report::format_statistics(&self.counts, self.text)
    }

    /// Formatted score lines for `selector`.
    pub fn score_lines(&self, selector: ScoreSelector) -> Vec<String> {
        self.scores(selector)
            .iter()
            .map(|result| report::format_score(result.kind, result))
            .collect()
    }

    /// Counts and scores bundled for serialization.
    pub fn to_report(&self, selector: Option<ScoreSelector>) -> Analysis {
        Analysis {
            counts: self.counts,
            scores: selector.map(|s| self.scores(s)).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Hi. Bye!";

    #[test]
    fn counts_match_free_function() {
        let analysis = TextAnalysis::new(TEXT);
        assert_eq!(*analysis.counts(), statistics::analyze(TEXT));
        assert_eq!(analysis.text(), TEXT);
    }

    #[test]
    fn statistics_include_text() {
        let analysis = TextAnalysis::new(TEXT);
        let stats = analysis.statistics();
        assert!(stats.starts_with("The text is:\nHi. Bye!\n\n"));
        assert!(stats.contains("Sentences: 2\n"));
    }

    #[test]
    fn score_lines_follow_selector() {
        let analysis = TextAnalysis::new(TEXT);
        let lines = analysis.score_lines(ScoreSelector::All);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Automated Readability Index: "));
        assert!(lines[3].starts_with("Coleman–Liau index: "));

        let lines = analysis.score_lines(ScoreSelector::Fk);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Flesch–Kincaid readability tests: "));
    }

    #[test]
    fn report_without_selector_has_no_scores() {
        let analysis = TextAnalysis::new(TEXT);
        assert!(analysis.to_report(None).scores.is_empty());
        assert_eq!(analysis.to_report(Some(ScoreSelector::Cl)).scores.len(), 1);
    }

    #[test]
    fn repeated_scores_are_identical() {
        let analysis = TextAnalysis::new(TEXT);
        assert_eq!(analysis.score(ScoreKind::Smog), analysis.score(ScoreKind::Smog));
    }
}

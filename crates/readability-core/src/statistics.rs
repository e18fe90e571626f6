//! Text statistics extraction.
//!
//! Derives the five counts every readability formula consumes from raw text:
//! characters, words, sentences, syllables, and polysyllables.
//!
//! The counting rules are pattern heuristics for English prose, not
//! linguistic analysis. Splitting follows regex-split semantics: input with
//! no delimiter is a single segment, leading and internal empty segments are
//! kept, and trailing empty segments are dropped. Scores computed from these
//! counts stay comparable with other tools that count this way.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Trailing silent "e" before punctuation (punctuation removed too) or at a word end.
static SILENT_E_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"e?[,.!?]|e\b").expect("valid regex"));

/// A maximal run of vowels, treated as one syllable.
static VOWEL_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[aeiouy]+").expect("valid regex"));

/// Words with more vowel runs than this are polysyllables.
const POLYSYLLABLE_THRESHOLD: usize = 2;

/// Counts derived from a text, computed once and reused by every score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    /// UTF-16 code units other than spaces, newlines, and tabs.
    pub characters: usize,
    /// Whitespace-separated segments.
    pub words: usize,
    /// Segments separated by `.`, `!`, or `?`.
    pub sentences: usize,
    /// Vowel runs across all words.
    pub syllables: usize,
    /// Words with more than two vowel runs.
    pub polysyllables: usize,
}

/// Compute all five counts for `text`.
///
/// Pure and deterministic: the same text always yields the same counts.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> Counts {
    let (syllables, polysyllables) = count_syllables(text);
    let counts = Counts {
        characters: count_characters(text),
        words: count_words(text),
        sentences: count_sentences(text),
        syllables,
        polysyllables,
    };
    tracing::debug!(
        characters = counts.characters,
        words = counts.words,
        sentences = counts.sentences,
        syllables = counts.syllables,
        polysyllables = counts.polysyllables,
        "text analyzed"
    );
    counts
}

/// Count characters after removing spaces, newlines, and tabs.
///
/// Carriage returns and other whitespace are counted. The unit is the UTF-16
/// code unit: characters outside the Basic Multilingual Plane, such as most
/// emoji, count twice.
pub fn count_characters(text: &str) -> usize {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\t'))
        .map(char::len_utf16)
        .sum()
}

/// Count words by splitting on every single whitespace character.
///
/// Runs of whitespace produce empty words, which are counted unless they
/// trail the text.
pub fn count_words(text: &str) -> usize {
    count_segments(text, is_split_whitespace)
}

/// Count sentences by splitting on every `.`, `!`, and `?`.
///
/// `"Wait... what?"` has four sentences: the two empty segments between
/// the dots are kept, and the empty segment after `?` is dropped.
pub fn count_sentences(text: &str) -> usize {
    count_segments(text, |c| matches!(c, '.' | '!' | '?'))
}

/// Count syllables and polysyllables.
///
/// Returns `(syllables, polysyllables)`.
pub fn count_syllables(text: &str) -> (usize, usize) {
    let cleaned = SILENT_E_PATTERN.replace_all(text, "");

    cleaned
        .split(is_split_whitespace)
        .map(|word| VOWEL_RUN_PATTERN.find_iter(word).count())
        .fold((0, 0), |(syllables, polysyllables), runs| {
            let poly = usize::from(runs > POLYSYLLABLE_THRESHOLD);
            (syllables + runs, polysyllables + poly)
        })
}

/// The ASCII whitespace class: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
const fn is_split_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Count the segments produced by splitting `text` on single delimiter chars.
///
/// Text without any delimiter is one segment, even when empty. Otherwise
/// trailing empty segments are not counted.
fn count_segments(text: &str, is_delimiter: impl Fn(char) -> bool) -> usize {
    if !text.chars().any(&is_delimiter) {
        return 1;
    }

    let segments: Vec<&str> = text.split(&is_delimiter).collect();
    let trailing_empty = segments.iter().rev().take_while(|s| s.is_empty()).count();
    segments.len() - trailing_empty
}

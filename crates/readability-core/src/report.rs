//! Human-readable and serializable output.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::scores::{ScoreKind, ScoreResult};
use crate::statistics::Counts;

/// Counts plus the requested scores, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Text statistics.
    pub counts: Counts,
    /// Requested scores, in report order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub scores: Vec<ScoreResult>,
}

/// Format the statistics report: the text itself, then the five counts.
///
/// Counts are listed as words, sentences, characters, syllables, polysyllables.
pub fn format_statistics(counts: &Counts, text: &str) -> String {
    format!(
        "The text is:\n{text}\n\n\
         Words: {}\n\
         Sentences: {}\n\
         Characters: {}\n\
         Syllables: {}\n\
         Polysyllables: {}\n",
        counts.words, counts.sentences, counts.characters, counts.syllables, counts.polysyllables,
    )
}

/// Format one score line, e.g.
/// `Automated Readability Index: 7.08 (about 13-year-olds).`
///
/// The value is rounded half away from zero from its shortest decimal form,
/// so `5.465` prints as `5.47`. Infinite values print as `Infinity`.
pub fn format_score(kind: ScoreKind, result: &ScoreResult) -> String {
    format!(
        "{}: {} (about {}-year-olds).",
        kind.name(),
        two_decimals(result.value),
        result.age
    )
}

fn two_decimals(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    // `Display` for f64 is the shortest round-trip form, never exponential.
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let mut text: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    text.insert(text.len() - 2, '.');
    if value.is_sign_negative() {
        text.insert(0, '-');
    }
    text
}

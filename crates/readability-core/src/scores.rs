//! Readability indexes and the age-range table.
//!
//! Four published formulas, each a grade-level estimate:
//!
//! - ARI: `4.71 * (characters/words) + 0.5 * (words/sentences) - 21.43`
//! - FK: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//! - SMOG: `1.043 * sqrt(polysyllables * (30/sentences)) + 3.1291`
//! - CL: `0.0588 * L - 0.296 * S - 15.8`, with `L` and `S` per 100 words
//!
//! Zero words or sentences are not guarded here: the result is NaN or
//! infinite and maps to the `"24+"` age label. Use [`ScoreResult::is_defined`]
//! to detect it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::statistics::Counts;

/// Label for scores outside the table.
pub const AGE_OVERFLOW: &str = "24+";

/// Age labels for ceiling scores 1 through 13: `(minimal, maximal)`.
static AGE_RANGES: [(&str, &str); 13] = [
    ("5", "6"),
    ("6", "7"),
    ("7", "9"),
    ("9", "10"),
    ("10", "11"),
    ("11", "12"),
    ("12", "13"),
    ("13", "14"),
    ("14", "15"),
    ("15", "16"),
    ("16", "17"),
    ("17", "18"),
    ("18", "24"),
];

/// A readability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreKind {
    /// Automated Readability Index.
    #[serde(rename = "ARI")]
    Ari,
    /// Flesch–Kincaid grade level.
    #[serde(rename = "FK")]
    Fk,
    /// Simple Measure of Gobbledygook.
    #[serde(rename = "SMOG")]
    Smog,
    /// Coleman–Liau index.
    #[serde(rename = "CL")]
    Cl,
}

impl ScoreKind {
    /// All kinds, in report order.
    pub const ALL: [Self; 4] = [Self::Ari, Self::Fk, Self::Smog, Self::Cl];

    /// Human-readable index name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::Fk => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::Cl => "Coleman–Liau index",
        }
    }

    /// Short code, as accepted by [`ScoreSelector`].
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::Fk => "FK",
            Self::Smog => "SMOG",
            Self::Cl => "CL",
        }
    }

    /// Which age-table column this index reads.
    pub const fn age_column(&self) -> AgeColumn {
        match self {
            Self::Ari | Self::Fk | Self::Smog => AgeColumn::Minimal,
            Self::Cl => AgeColumn::Maximal,
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Column of the age-range table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeColumn {
    /// Lower bound of the age range.
    Minimal,
    /// Upper bound of the age range.
    Maximal,
}

/// Which scores to compute: one index, or all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ScoreSelector {
    /// Automated Readability Index.
    #[serde(rename = "ARI")]
    #[cfg_attr(feature = "clap", value(name = "ARI"))]
    Ari,
    /// Flesch–Kincaid readability tests.
    #[serde(rename = "FK")]
    #[cfg_attr(feature = "clap", value(name = "FK"))]
    Fk,
    /// Simple Measure of Gobbledygook.
    #[serde(rename = "SMOG")]
    #[cfg_attr(feature = "clap", value(name = "SMOG"))]
    Smog,
    /// Coleman–Liau index.
    #[serde(rename = "CL")]
    #[cfg_attr(feature = "clap", value(name = "CL"))]
    Cl,
    /// All four indexes.
    #[serde(rename = "all")]
    #[cfg_attr(feature = "clap", value(name = "all"))]
    All,
}

impl ScoreSelector {
    /// Accepted selector spellings, in display order.
    pub const NAMES: [&'static str; 5] = ["ARI", "FK", "SMOG", "CL", "all"];

    /// The kinds this selector covers, in report order.
    pub const fn kinds(&self) -> &'static [ScoreKind] {
        match self {
            Self::Ari => &[ScoreKind::Ari],
            Self::Fk => &[ScoreKind::Fk],
            Self::Smog => &[ScoreKind::Smog],
            Self::Cl => &[ScoreKind::Cl],
            Self::All => &ScoreKind::ALL,
        }
    }

    /// The selector as written on the command line and in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::Fk => "FK",
            Self::Smog => "SMOG",
            Self::Cl => "CL",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ScoreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreSelector {
    type Err = AnalysisError;

    /// Parse a selector. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> AnalysisResult<Self> {
        match s {
            "ARI" => Ok(Self::Ari),
            "FK" => Ok(Self::Fk),
            "SMOG" => Ok(Self::Smog),
            "CL" => Ok(Self::Cl),
            "all" => Ok(Self::All),
            _ => Err(AnalysisError::UnknownScore {
                name: s.to_string(),
                available: Self::NAMES.join(", "),
            }),
        }
    }
}

impl From<ScoreKind> for ScoreSelector {
    fn from(kind: ScoreKind) -> Self {
        match kind {
            ScoreKind::Ari => Self::Ari,
            ScoreKind::Fk => Self::Fk,
            ScoreKind::Smog => Self::Smog,
            ScoreKind::Cl => Self::Cl,
        }
    }
}

/// A computed index value with its age label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Which index was computed.
    pub kind: ScoreKind,
    /// Raw, unrounded index value.
    pub value: f64,
    /// Approximate reader age, e.g. `"13"` or `"24+"`.
    pub age: String,
}

impl ScoreResult {
    /// Whether the value is finite.
    ///
    /// Text with zero words or zero sentences produces NaN or infinite scores.
    pub const fn is_defined(&self) -> bool {
        self.value.is_finite()
    }
}

/// Compute one index from `counts`.
#[tracing::instrument(level = "debug", skip_all, fields(kind = %kind))]
pub fn score(counts: &Counts, kind: ScoreKind) -> ScoreResult {
    let value = index_value(counts, kind);
    let age = age_range(ceiling_key(value), kind.age_column());
    tracing::debug!(value, age, "score computed");
    ScoreResult {
        kind,
        value,
        age: age.to_string(),
    }
}

/// Compute every index covered by `selector`, in report order.
pub fn scores(counts: &Counts, selector: ScoreSelector) -> Vec<ScoreResult> {
    selector
        .kinds()
        .iter()
        .map(|&kind| score(counts, kind))
        .collect()
}

/// Look up the age label for a ceiling-rounded score.
///
/// Keys 1 through 13 map to the table; anything else is `"24+"`.
pub fn age_range(key: i64, column: AgeColumn) -> &'static str {
    usize::try_from(key)
        .ok()
        .and_then(|key| key.checked_sub(1))
        .and_then(|index| AGE_RANGES.get(index))
        .map_or(AGE_OVERFLOW, |&(minimal, maximal)| match column {
            AgeColumn::Minimal => minimal,
            AgeColumn::Maximal => maximal,
        })
}

/// Round a score up to the table key. NaN becomes 0; infinities saturate.
#[allow(clippy::cast_possible_truncation)]
fn ceiling_key(value: f64) -> i64 {
    value.ceil() as i64
}

// Written term by term so results match the published formulas exactly.
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
fn index_value(counts: &Counts, kind: ScoreKind) -> f64 {
    let characters = counts.characters as f64;
    let words = counts.words as f64;
    let sentences = counts.sentences as f64;
    let syllables = counts.syllables as f64;
    let polysyllables = counts.polysyllables as f64;

    match kind {
        ScoreKind::Ari => 4.71 * (characters / words) + 0.5 * (words / sentences) - 21.43,
        ScoreKind::Fk => 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59,
        ScoreKind::Smog => 1.043 * (polysyllables * (30.0 / sentences)).sqrt() + 3.1291,
        ScoreKind::Cl => {
            let l = characters / words * 100.0;
            let s = sentences / words * 100.0;
            0.0588 * l - 0.296 * s - 15.8
        }
    }
}

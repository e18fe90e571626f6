//! Core library for readability.
//!
//! Computes text statistics and four readability indexes for plain text:
//! Automated Readability Index (ARI), Flesch–Kincaid (FK), Simple Measure
//! of Gobbledygook (SMOG), and Coleman–Liau (CL). Each score maps to an
//! approximate reader age.
//!
//! # Modules
//!
//! - [`statistics`] - Character, word, sentence, and syllable counting
//! - [`scores`] - Index formulas and the age-range table
//! - [`report`] - Text and JSON output shapes
//! - [`session`] - A text paired with its cached counts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readability_core::{ScoreKind, ScoreSelector, TextAnalysis};
//!
//! let analysis = TextAnalysis::new("The cat sat on a mat.");
//! assert_eq!(analysis.counts().words, 6);
//!
//! let ari = analysis.score(ScoreKind::Ari);
//! println!("{}", readability_core::format_score(ScoreKind::Ari, &ari));
//!
//! for line in analysis.score_lines(ScoreSelector::All) {
//!     println!("{line}");
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod report;
pub mod scores;
pub mod session;
pub mod statistics;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use report::{Analysis, format_score, format_statistics};
pub use scores::{AgeColumn, ScoreKind, ScoreResult, ScoreSelector, age_range, score, scores};
pub use session::TextAnalysis;
pub use statistics::{Counts, analyze};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

//! Error types for dive parsing and scoring

use std::path::PathBuf;

/// A dive line could not be turned into a [`DiveRecord`](crate::dive::DiveRecord).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least a dive number and a difficulty, found {found} token(s)")]
    MissingTokens { found: usize },

    #[error("invalid {field} '{token}': not a number")]
    InvalidNumber { field: &'static str, token: String },

    #[error("dive number must be 1 or greater, got {0}")]
    InvalidDiveNumber(u32),

    #[error("difficulty must be a positive number, got {0}")]
    InvalidDifficulty(f64),

    #[error("judge score {value} at position {position} is outside 0-10")]
    ScoreOutOfRange { position: usize, value: f64 },

    #[error("judge score at position {position} is not finite")]
    NonFiniteScore { position: usize },

    #[error("line is not valid UTF-8")]
    InvalidEncoding,
}

/// Scoring arithmetic was asked to work on degenerate input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("dive {dive_number} has {found} judge score(s); at least 2 are needed to drop the high and low")]
    TooFewJudges { dive_number: u32, found: usize },

    #[error("dive {dive_number} has {found} judge score(s); the panel is configured for {expected}")]
    PanelSize {
        dive_number: u32,
        expected: usize,
        found: usize,
    },

    #[error("dive {dive_number} score is too large to represent")]
    ScoreOverflow { dive_number: u32 },

    #[error("cannot average an empty series of dives")]
    EmptySeries,
}

/// Top-level error for reading and scoring a dive series.
#[derive(Debug, thiserror::Error)]
pub enum DiveError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiveError>;

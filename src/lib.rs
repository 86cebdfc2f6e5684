//! Dive scoring: parse judge sheets, trim the high and low judge, apply
//! difficulty, and report per-dive scores, the average and the best dives.
//!
//! ```
//! use dive_score::dive::parse_dive_record;
//! use dive_score::scoring::{score_series, ScoringConfig};
//!
//! let records = vec![
//!     parse_dive_record("1 3.0 8 8.5 9 9 8.5 9 7.5").unwrap(),
//!     parse_dive_record("2 2.0 6 6 6 6 6 6 6").unwrap(),
//! ];
//! let series = score_series(&records, &ScoringConfig::default()).unwrap();
//! assert_eq!(series.top_scores.len(), 2);
//! ```

pub mod config;
pub mod dive;
pub mod error;
pub mod output;
pub mod scoring;
pub mod telemetry;

pub use error::{DiveError, DomainError, ParseError};

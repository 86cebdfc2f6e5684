pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{
    aggregate, aggregate_top, calculate_score, score_dive, score_series,
    score_series_with_breakdown, ScoreBreakdown, ScoreResult,
};
pub use validation::validate_scoring;

use serde::{Deserialize, Serialize};

/// Factor applied after difficulty when no multiplier is configured.
pub const DEFAULT_MULTIPLIER: f64 = 0.6;

/// Number of best scores reported when no count is configured.
pub const TOP_SCORE_COUNT: usize = 3;

/// Scoring configuration.
///
/// Every field is optional; missing fields fall back to the standard rules
/// (x0.6 multiplier, any panel of at least two judges, scores checked
/// against 0-10, top three reported).
///
/// Example YAML:
/// ```yaml
/// scoring:
///   multiplier: 0.6
///   panel_size: 7
///   check_range: true
///   top: 3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Multiplier applied after the trimmed total is scaled by difficulty
    #[serde(default)]
    pub multiplier: Option<f64>,

    /// Require exactly this many judge scores per dive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_size: Option<usize>,

    /// Reject judge scores outside 0-10 while parsing
    #[serde(default)]
    pub check_range: Option<bool>,

    /// How many of the best dive scores to report
    #[serde(default)]
    pub top: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            multiplier: Some(DEFAULT_MULTIPLIER),
            panel_size: None,
            check_range: Some(true),
            top: Some(TOP_SCORE_COUNT),
        }
    }
}

impl ScoringConfig {
    pub fn multiplier(&self) -> f64 {
        self.multiplier.unwrap_or(DEFAULT_MULTIPLIER)
    }

    pub fn check_range(&self) -> bool {
        self.check_range.unwrap_or(true)
    }

    pub fn top(&self) -> usize {
        self.top.unwrap_or(TOP_SCORE_COUNT)
    }
}

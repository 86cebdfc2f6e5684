use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
    #[serde(default)]
    pub report: Option<ReportConfig>,
}

/// How reports are presented. CLI flags take precedence.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Skip malformed lines instead of aborting the run
    #[serde(default)]
    pub skip_invalid: Option<bool>,
    /// Print the welcome banner ahead of text reports
    #[serde(default)]
    pub intro: Option<bool>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: Some(OutputFormat::Text),
            skip_invalid: Some(false),
            intro: Some(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: Some(ScoringConfig::default()),
            report: Some(ReportConfig::default()),
        }
    }
}

impl Config {
    /// Scoring rules in effect, falling back to the defaults
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn effective_report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }
}

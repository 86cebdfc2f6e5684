use tracing::trace;

use super::config::{ScoringConfig, TOP_SCORE_COUNT};
use crate::dive::{Aggregate, DiveRecord, ScoredDive, SeriesResult};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub judge_total: f64,   // Sum of every judge score
    pub dropped_high: f64,  // The one highest score removed
    pub dropped_low: f64,   // The one lowest score removed
    pub trimmed_total: f64, // Sum after removing high and low
    pub difficulty: f64,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score one dive under the standard rules: drop one highest and one lowest
/// judge score, then multiply the rest by difficulty and 0.6.
///
/// ```
/// use dive_score::dive::parse_dive_record;
/// use dive_score::scoring::score_dive;
///
/// let record = parse_dive_record("1 3.0 8 8.5 9 9 8.5 9 7.5").unwrap();
/// let score = score_dive(&record).unwrap();
/// assert!((score - 77.4).abs() < 1e-9);
/// ```
pub fn score_dive(record: &DiveRecord) -> Result<f64, DomainError> {
    calculate_score(record, &ScoringConfig::default()).map(|r| r.score)
}

/// Score one dive under `config`, keeping the intermediate values.
///
/// Exactly one instance of the maximum and one of the minimum are dropped,
/// even when several judges gave the same extreme score. Scores are summed
/// in sorted order so the result does not depend on judge order.
pub fn calculate_score(
    record: &DiveRecord,
    config: &ScoringConfig,
) -> Result<ScoreResult, DomainError> {
    let found = record.judge_count();
    if found < 2 {
        return Err(DomainError::TooFewJudges {
            dive_number: record.dive_number,
            found,
        });
    }
    if let Some(expected) = config.panel_size {
        if found != expected {
            return Err(DomainError::PanelSize {
                dive_number: record.dive_number,
                expected,
                found,
            });
        }
    }

    let mut sorted = record.judge_scores.clone();
    sorted.sort_by(f64::total_cmp);

    let dropped_low = sorted[0];
    let dropped_high = sorted[found - 1];
    let trimmed_total: f64 = sorted[1..found - 1].iter().sum();
    let judge_total = dropped_low + trimmed_total + dropped_high;

    let multiplier = config.multiplier();
    let score = trimmed_total * record.difficulty * multiplier;
    if !score.is_finite() {
        return Err(DomainError::ScoreOverflow {
            dive_number: record.dive_number,
        });
    }

    trace!(
        dive = record.dive_number,
        trimmed_total,
        difficulty = record.difficulty,
        score,
        "scored dive"
    );

    Ok(ScoreResult {
        score,
        breakdown: ScoreBreakdown {
            judge_total,
            dropped_high,
            dropped_low,
            trimmed_total,
            difficulty: record.difficulty,
            multiplier,
        },
    })
}

/// Average the scores and pick the three best, highest first.
pub fn aggregate(scores: &[f64]) -> Result<Aggregate, DomainError> {
    aggregate_top(scores, TOP_SCORE_COUNT)
}

/// Average the scores and pick the `n` best, highest first. Fewer than `n`
/// scores yields all of them.
pub fn aggregate_top(scores: &[f64], n: usize) -> Result<Aggregate, DomainError> {
    if scores.is_empty() {
        return Err(DomainError::EmptySeries);
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;

    let mut top_scores = scores.to_vec();
    top_scores.sort_by(|a, b| b.total_cmp(a));
    top_scores.truncate(n);

    Ok(Aggregate {
        average,
        top_scores,
    })
}

/// Score every record in input order and aggregate the results.
pub fn score_series(
    records: &[DiveRecord],
    config: &ScoringConfig,
) -> Result<SeriesResult, DomainError> {
    score_series_with_breakdown(records, config).map(|(series, _)| series)
}

/// Like [`score_series`], also returning each dive's breakdown in input order.
pub fn score_series_with_breakdown(
    records: &[DiveRecord],
    config: &ScoringConfig,
) -> Result<(SeriesResult, Vec<ScoreBreakdown>), DomainError> {
    let mut scored_dives = Vec::with_capacity(records.len());
    let mut breakdowns = Vec::with_capacity(records.len());
    for record in records {
        let result = calculate_score(record, config)?;
        scored_dives.push(ScoredDive {
            dive_number: record.dive_number,
            score: result.score,
        });
        breakdowns.push(result.breakdown);
    }

    let scores: Vec<f64> = scored_dives.iter().map(|d| d.score).collect();
    let Aggregate {
        average,
        top_scores,
    } = aggregate_top(&scores, config.top())?;

    let series = SeriesResult {
        scored_dives,
        average,
        top_scores,
    };
    Ok((series, breakdowns))
}

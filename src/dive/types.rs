use serde::Serialize;

/// One dive attempt as read from the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct DiveRecord {
    pub dive_number: u32,
    pub difficulty: f64,
    pub judge_scores: Vec<f64>, // Input order, one entry per judge
}

impl DiveRecord {
    pub fn new(dive_number: u32, difficulty: f64, judge_scores: Vec<f64>) -> Self {
        Self {
            dive_number,
            difficulty,
            judge_scores,
        }
    }

    /// Number of judges who scored this dive
    pub fn judge_count(&self) -> usize {
        self.judge_scores.len()
    }
}

/// A dive together with its computed score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDive {
    pub dive_number: u32,
    pub score: f64,
}

/// Average and best scores over a series of dives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub average: f64,
    pub top_scores: Vec<f64>, // Descending
}

/// Everything reported for one diver's series of dives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResult {
    pub scored_dives: Vec<ScoredDive>,
    pub average: f64,
    pub top_scores: Vec<f64>,
}

impl SeriesResult {
    pub fn dive_count(&self) -> usize {
        self.scored_dives.len()
    }
}

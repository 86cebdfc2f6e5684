use std::str::FromStr;

use super::types::DiveRecord;
use crate::error::ParseError;

/// Lowest and highest score a judge may award.
pub const MIN_JUDGE_SCORE: f64 = 0.0;
pub const MAX_JUDGE_SCORE: f64 = 10.0;

/// Parse one whitespace-separated dive line with judge score range checking on.
///
/// Format: `<dive number> <difficulty> <score1> ... <scoreN>`
///
/// ```
/// use dive_score::dive::parse_dive_record;
///
/// let record = parse_dive_record("1 3.0 8 8.5 9 9 8.5 9 7.5").unwrap();
/// assert_eq!(record.dive_number, 1);
/// assert_eq!(record.judge_scores.len(), 7);
/// ```
pub fn parse_dive_record(line: &str) -> Result<DiveRecord, ParseError> {
    parse_dive_record_with(line, true)
}

/// Parse one dive line. When `check_range` is false, judge scores outside
/// 0-10 are accepted; non-finite scores are always rejected.
pub fn parse_dive_record_with(line: &str, check_range: bool) -> Result<DiveRecord, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ParseError::MissingTokens {
            found: tokens.len(),
        });
    }

    let dive_number: u32 = tokens[0]
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            field: "dive number",
            token: tokens[0].to_string(),
        })?;
    if dive_number == 0 {
        return Err(ParseError::InvalidDiveNumber(dive_number));
    }

    let difficulty = parse_real(tokens[1], "difficulty")?;
    if !difficulty.is_finite() || difficulty <= 0.0 {
        return Err(ParseError::InvalidDifficulty(difficulty));
    }

    let judge_scores = tokens[2..]
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let position = i + 1;
            let value = parse_real(token, "judge score")?;
            if !value.is_finite() {
                return Err(ParseError::NonFiniteScore { position });
            }
            if check_range && !(MIN_JUDGE_SCORE..=MAX_JUDGE_SCORE).contains(&value) {
                return Err(ParseError::ScoreOutOfRange { position, value });
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DiveRecord::new(dive_number, difficulty, judge_scores))
}

fn parse_real(token: &str, field: &'static str) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

impl FromStr for DiveRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dive_record(s)
    }
}

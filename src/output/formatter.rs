use std::io::IsTerminal;

use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::dive::{ScoredDive, SeriesResult, SkippedLine};
use crate::scoring::ScoreBreakdown;

/// Report rendering selected by `--format` or `report.format` in the config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Tsv,
    Json,
}

/// Welcome banner printed ahead of a text report
pub fn format_intro() -> String {
    "Welcome to the Diver Scoring program. This program will calculate an\n  \
     overall score for a diver, based on individual dives."
        .to_string()
}

/// Format a score with two decimals ("77.40")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// One line per dive: "The diver's score for dive 1 is: 77.40"
pub fn format_dive_line(dive: &ScoredDive, use_colors: bool) -> String {
    let score = format_score(dive.score);
    if use_colors {
        format!(
            "The diver's score for dive {} is: {}",
            dive.dive_number,
            score.bold()
        )
    } else {
        format!("The diver's score for dive {} is: {}", dive.dive_number, score)
    }
}

pub fn format_average_line(average: f64, use_colors: bool) -> String {
    let average = format_score(average);
    if use_colors {
        format!("The average score for these dives is: {}", average.bold())
    } else {
        format!("The average score for these dives is: {}", average)
    }
}

/// "The top three scores are: 80.00, 77.40, and 75.00"
///
/// Singular and two-item forms read naturally ("The top score is: 80.00",
/// "... are: 80.00 and 77.40").
pub fn format_top_scores_line(top_scores: &[f64], use_colors: bool) -> String {
    let formatted: Vec<String> = top_scores
        .iter()
        .map(|s| {
            let s = format_score(*s);
            if use_colors {
                s.green().to_string()
            } else {
                s
            }
        })
        .collect();

    match formatted.as_slice() {
        [] => "No scores to rank.".to_string(),
        [only] => format!("The top score is: {}", only),
        [first, second] => format!("The top two scores are: {} and {}", first, second),
        [rest @ .., last] => format!(
            "The top {} scores are: {}, and {}",
            count_word(formatted.len()),
            rest.join(", "),
            last
        ),
    }
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// Full human-readable report: per-dive lines, a blank line, the average and
/// the top scores.
pub fn format_text_report(series: &SeriesResult, use_colors: bool) -> String {
    let mut lines: Vec<String> = series
        .scored_dives
        .iter()
        .map(|dive| format_dive_line(dive, use_colors))
        .collect();
    lines.push(String::new());
    lines.push(format_average_line(series.average, use_colors));
    lines.push(format_top_scores_line(&series.top_scores, use_colors));
    lines.join("\n")
}

/// Tab-separated `dive_number<TAB>score` rows for scripting (no headers, no colors)
pub fn format_tsv(series: &SeriesResult) -> String {
    series
        .scored_dives
        .iter()
        .map(|dive| format!("{}\t{}", dive.dive_number, format_score(dive.score)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonReport {
    dive_count: usize,
    dives: Vec<ScoredDive>,
    average: f64,
    top_scores: Vec<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pretty JSON report with every score rounded to two decimals
pub fn format_json(series: &SeriesResult) -> serde_json::Result<String> {
    let report = JsonReport {
        dive_count: series.dive_count(),
        dives: series
            .scored_dives
            .iter()
            .map(|d| ScoredDive {
                dive_number: d.dive_number,
                score: round2(d.score),
            })
            .collect(),
        average: round2(series.average),
        top_scores: series.top_scores.iter().copied().map(round2).collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Render a report in the requested format. `intro` only affects text output.
pub fn render_report(
    series: &SeriesResult,
    format: OutputFormat,
    intro: bool,
    use_colors: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let body = format_text_report(series, use_colors);
            if intro {
                Ok(format!("{}\n\n{}", format_intro(), body))
            } else {
                Ok(body)
            }
        }
        OutputFormat::Tsv => Ok(format_tsv(series)),
        OutputFormat::Json => format_json(series),
    }
}

/// Verbose explanation of how a dive's score was reached
pub fn format_breakdown(dive_number: u32, breakdown: &ScoreBreakdown) -> String {
    format!(
        "Dive {}: {} total - {} high - {} low = {} x {} difficulty x {} = {}",
        dive_number,
        format_score(breakdown.judge_total),
        format_score(breakdown.dropped_high),
        format_score(breakdown.dropped_low),
        format_score(breakdown.trimmed_total),
        breakdown.difficulty,
        breakdown.multiplier,
        format_score(breakdown.trimmed_total * breakdown.difficulty * breakdown.multiplier)
    )
}

pub fn format_skipped(skipped: &SkippedLine) -> String {
    format!("line {}: {}", skipped.line_number, skipped.error)
}

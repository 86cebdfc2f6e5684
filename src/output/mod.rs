pub mod file;
pub mod formatter;

pub use file::write_report;

pub use formatter::{
    format_average_line, format_breakdown, format_dive_line, format_intro, format_json,
    format_score, format_skipped, format_text_report, format_top_scores_line, format_tsv,
    render_report, should_use_colors, OutputFormat,
};

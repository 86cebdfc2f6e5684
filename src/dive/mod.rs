pub mod parse;
pub mod reader;
pub mod types;

pub use parse::{parse_dive_record, parse_dive_record_with};
pub use reader::{load_dive_file, read_dives, InvalidLinePolicy, ReadOptions, ReadOutcome, SkippedLine};
pub use types::{Aggregate, DiveRecord, ScoredDive, SeriesResult};

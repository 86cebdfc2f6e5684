use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use super::parse::parse_dive_record_with;
use super::types::DiveRecord;
use crate::error::{DiveError, ParseError, Result};

/// What to do when a line fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidLinePolicy {
    /// Stop at the first malformed line
    #[default]
    Abort,
    /// Log and record the line, then keep reading
    Skip,
}

#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub check_range: bool,
    pub on_invalid: InvalidLinePolicy,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            check_range: true,
            on_invalid: InvalidLinePolicy::Abort,
        }
    }
}

/// A line dropped under [`InvalidLinePolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line_number: usize, // 1-based
    pub error: ParseError,
}

#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    pub records: Vec<DiveRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Read dive records from a line source, front to back. Blank lines are ignored.
pub fn read_dives<R: BufRead>(reader: R, options: &ReadOptions) -> Result<ReadOutcome> {
    read_dives_from(reader, options, Path::new("<input>"))
}

/// Open `path` and read its dive records. The file is closed before returning,
/// whether reading succeeds or not.
pub fn load_dive_file(path: &Path, options: &ReadOptions) -> Result<ReadOutcome> {
    let file = File::open(path).map_err(|source| DiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading dive data");
    read_dives_from(BufReader::new(file), options, path)
}

fn read_dives_from<R: BufRead>(reader: R, options: &ReadOptions, path: &Path) -> Result<ReadOutcome> {
    let mut outcome = ReadOutcome::default();

    // Split on raw bytes so a badly encoded line is a record error, not an I/O error
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line_number = idx + 1;
        let mut bytes = bytes.map_err(|source| DiveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let parsed = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_dive_record_with(&line, options.check_range),
            Err(_) => Err(ParseError::InvalidEncoding),
        };

        match parsed {
            Ok(record) => outcome.records.push(record),
            Err(error) => match options.on_invalid {
                InvalidLinePolicy::Abort => {
                    return Err(DiveError::Parse {
                        line: line_number,
                        source: error,
                    });
                }
                InvalidLinePolicy::Skip => {
                    warn!(line = line_number, %error, "skipping malformed dive line");
                    outcome.skipped.push(SkippedLine { line_number, error });
                }
            },
        }
    }

    debug!(
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "finished reading dive data"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SAMPLE: &str = "1 3.0 8 8.5 9 9 8.5 9 7.5\n\
                          2 2.5 7 7 7.5 8 7 6.5 7\n\
                          \n\
                          3 3.2 9 9.5 9 8.5 9 9 9.5\n";

    #[test]
    fn test_read_skips_blank_lines() {
        let outcome = read_dives(Cursor::new(SAMPLE), &ReadOptions::default()).unwrap();
        assert_eq!(outcome.records.len(), 3);
        assert!(outcome.skipped.is_empty());
        let numbers: Vec<u32> = outcome.records.iter().map(|r| r.dive_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_aborts_on_first_bad_line() {
        let input = "1 3.0 8 8 8\n2 oops 8 8 8\n3 bad\n";
        let err = read_dives(Cursor::new(input), &ReadOptions::default()).unwrap_err();
        match err {
            DiveError::Parse { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, ParseError::InvalidNumber { field: "difficulty", .. }));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_skip_policy_records_bad_lines() {
        let input = "1 3.0 8 8 8\n2 oops 8 8 8\n\n4 2.0 5 11 5\n5 1.0 6 6 6\n";
        let options = ReadOptions {
            check_range: true,
            on_invalid: InvalidLinePolicy::Skip,
        };
        let outcome = read_dives(Cursor::new(input), &options).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(outcome.skipped[0].line_number, 2);
        assert_eq!(outcome.skipped[1].line_number, 4);
        assert!(matches!(
            outcome.skipped[1].error,
            ParseError::ScoreOutOfRange { position: 2, .. }
        ));
    }

    #[test]
    fn test_read_without_range_check() {
        let options = ReadOptions {
            check_range: false,
            on_invalid: InvalidLinePolicy::Abort,
        };
        let outcome = read_dives(Cursor::new("1 2.0 5 11 5\n"), &options).unwrap();
        assert_eq!(outcome.records[0].judge_scores[1], 11.0);
    }

    #[test]
    fn test_read_crlf_line_endings() {
        let outcome =
            read_dives(Cursor::new("1 2.0 5 6 7\r\n\r\n2 2.0 5 6 7\r\n"), &ReadOptions::default())
                .unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].judge_scores, vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_read_invalid_utf8_aborts_as_parse_error() {
        let input: &[u8] = b"1 2.0 5 6 7\n2 2.0 \xff\xfe 8 8\n3 2.0 5 6 7\n";
        let err = read_dives(Cursor::new(input), &ReadOptions::default()).unwrap_err();
        match err {
            DiveError::Parse { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, ParseError::InvalidEncoding);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_invalid_utf8_skipped() {
        let input: &[u8] = b"1 2.0 5 6 7\n2 2.0 \xff\xfe 8 8\n3 2.0 5 6 7\n";
        let options = ReadOptions {
            check_range: true,
            on_invalid: InvalidLinePolicy::Skip,
        };
        let outcome = read_dives(Cursor::new(input), &options).unwrap();
        let numbers: Vec<u32> = outcome.records.iter().map(|r| r.dive_number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(
            outcome.skipped,
            vec![SkippedLine {
                line_number: 2,
                error: ParseError::InvalidEncoding
            }]
        );
    }

    #[test]
    fn test_read_empty_input() {
        let outcome = read_dives(Cursor::new(""), &ReadOptions::default()).unwrap();
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_load_dive_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let outcome = load_dive_file(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(outcome.records.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DiveData.txt");

        let err = load_dive_file(&path, &ReadOptions::default()).unwrap_err();
        match err {
            DiveError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}

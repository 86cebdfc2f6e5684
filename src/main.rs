use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

use dive_score::config::Config;
use dive_score::dive::{load_dive_file, parse_dive_record_with, InvalidLinePolicy, ReadOptions};
use dive_score::output::{self, OutputFormat};
use dive_score::scoring::{self, ScoringConfig};
use dive_score::{DiveError, DomainError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_PARSE: i32 = 2;
const EXIT_DOMAIN: i32 = 3;
const EXIT_CONFIG: i32 = 4;

/// Data file read when none is named on the command line
const DEFAULT_DATA_FILE: &str = "DiveData.txt";

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Dive data file (defaults to ./DiveData.txt)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Number of top scores to report
    #[arg(long)]
    top: Option<usize>,

    /// Skip malformed lines instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Accept judge scores outside 0-10
    #[arg(long)]
    no_range_check: bool,

    /// Do not print the welcome banner
    #[arg(long)]
    no_intro: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every dive in a data file (default if no subcommand)
    Report(ReportArgs),
    /// Score a single dive given on the command line
    Score {
        /// Dive number, difficulty and judge scores, e.g. `1 3.0 8 8.5 9 9 8.5 9 7.5`
        #[arg(required = true, num_args = 2.., allow_negative_numbers = true)]
        tokens: Vec<String>,

        /// Accept judge scores outside 0-10
        #[arg(long)]
        no_range_check: bool,
    },
    /// Validate a data file and list the lines that cannot be scored
    Check {
        /// Dive data file (defaults to ./DiveData.txt)
        file: Option<PathBuf>,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "dive-score")]
#[command(about = "Score dives: drop the high and low judge, apply difficulty, rank the results", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to config file (defaults to ~/.config/dive-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    dive_score::telemetry::init_tracing(cli.json_logs, dive_score::telemetry::level_for(cli.verbose));

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Report(ReportArgs::default()));
    let config_path = cli.config.map(PathBuf::from);

    let code = match command {
        Commands::Init { force } => run_init(config_path, force),
        Commands::Report(args) => run_report(&load_config_or_exit(config_path), args, cli.verbose),
        Commands::Score {
            tokens,
            no_range_check,
        } => run_score(
            &load_config_or_exit(config_path),
            &tokens,
            no_range_check,
            cli.verbose,
        ),
        Commands::Check { file } => run_check(&load_config_or_exit(config_path), file),
    };

    std::process::exit(code);
}

fn load_config_or_exit(path: Option<PathBuf>) -> Config {
    match dive_score::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

/// Validate scoring config, printing every problem found
fn checked_scoring(rules: ScoringConfig) -> Result<ScoringConfig, i32> {
    if let Err(errors) = scoring::validate_scoring(&rules) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }
    Ok(rules)
}

fn exit_code_for(err: &DiveError) -> i32 {
    match err {
        DiveError::Io { .. } => EXIT_IO,
        DiveError::Parse { .. } => EXIT_PARSE,
        DiveError::Domain(_) => EXIT_DOMAIN,
    }
}

fn run_report(config: &Config, args: ReportArgs, verbose: bool) -> i32 {
    let start_time = Instant::now();

    let mut rules = config.effective_scoring();
    if let Some(top) = args.top {
        rules.top = Some(top);
    }
    if args.no_range_check {
        rules.check_range = Some(false);
    }
    let rules = match checked_scoring(rules) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let report_config = config.effective_report();
    let format = args.format.or(report_config.format).unwrap_or_default();
    let skip_invalid = args.skip_invalid || report_config.skip_invalid.unwrap_or(false);
    let intro = !args.no_intro && report_config.intro.unwrap_or(true);

    let path = args
        .file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let options = ReadOptions {
        check_range: rules.check_range(),
        on_invalid: if skip_invalid {
            InvalidLinePolicy::Skip
        } else {
            InvalidLinePolicy::Abort
        },
    };

    let outcome = match load_dive_file(&path, &options) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code_for(&e);
        }
    };

    if !outcome.skipped.is_empty() {
        eprintln!(
            "Skipped {} malformed line(s) in {}",
            outcome.skipped.len(),
            path.display()
        );
    }

    let series = match scoring::score_series_with_breakdown(&outcome.records, &rules) {
        Ok((series, breakdowns)) => {
            if verbose {
                for (dive, breakdown) in series.scored_dives.iter().zip(&breakdowns) {
                    eprintln!("{}", output::format_breakdown(dive.dive_number, breakdown));
                }
            }
            series
        }
        Err(DomainError::EmptySeries) => {
            eprintln!("No dives found in {}", path.display());
            return EXIT_DOMAIN;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_DOMAIN;
        }
    };

    // Colors only for text going to a terminal
    let use_colors =
        args.output.is_none() && format == OutputFormat::Text && output::should_use_colors();
    let rendered = match output::render_report(&series, format, intro, use_colors) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to render report: {}", e);
            return EXIT_IO;
        }
    };

    match args.output {
        Some(out_path) => {
            if let Err(e) = output::write_report(&out_path, &rendered) {
                eprintln!("Error: {:#}", e);
                return EXIT_IO;
            }
            debug!(path = %out_path.display(), "report written");
        }
        None => println!("{}", rendered),
    }

    debug!(
        dives = series.dive_count(),
        elapsed = ?start_time.elapsed(),
        "report complete"
    );
    EXIT_SUCCESS
}

fn run_score(
    config: &Config,
    tokens: &[String],
    no_range_check: bool,
    verbose: bool,
) -> i32 {
    let mut rules = config.effective_scoring();
    if no_range_check {
        rules.check_range = Some(false);
    }
    let rules = match checked_scoring(rules) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let line = tokens.join(" ");
    let record = match parse_dive_record_with(&line, rules.check_range()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_PARSE;
        }
    };

    match scoring::calculate_score(&record, &rules) {
        Ok(result) => {
            if verbose {
                eprintln!(
                    "{}",
                    output::format_breakdown(record.dive_number, &result.breakdown)
                );
            }
            println!("{}", output::format_score(result.score));
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_DOMAIN
        }
    }
}

fn run_check(config: &Config, file: Option<PathBuf>) -> i32 {
    let rules = match checked_scoring(config.effective_scoring()) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let path = file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let options = ReadOptions {
        check_range: rules.check_range(),
        on_invalid: InvalidLinePolicy::Skip,
    };

    let outcome = match load_dive_file(&path, &options) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code_for(&e);
        }
    };

    let mut problems = 0;
    for skipped in &outcome.skipped {
        println!("{}", output::format_skipped(skipped));
        problems += 1;
    }
    for record in &outcome.records {
        if let Err(e) = scoring::calculate_score(record, &rules) {
            println!("dive {}: {}", record.dive_number, e);
            problems += 1;
        }
    }

    // A file with nothing to score would fail `report`
    if outcome.records.is_empty() {
        println!("no dives found");
        problems += 1;
    }

    if problems > 0 {
        println!("{} problem(s) found in {}", problems, path.display());
        EXIT_DOMAIN
    } else {
        println!(
            "{}: {} dive(s) OK",
            path.display(),
            outcome.records.len()
        );
        EXIT_SUCCESS
    }
}

fn run_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    let path = match config_path {
        Some(p) => p,
        None => match dive_score::config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    match dive_score::config::write_default_config(&path, force) {
        Ok(()) => {
            println!("Wrote default config to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::{
    engine::{evaluator::EvalOptions, normalizer::normalize, validator::is_valid},
    error::Error,
    parse,
    service::calculate,
    solve,
};

/// calculus evaluates arithmetic expressions made of numbers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Treat CONTENTS as a file and process every non-empty line.
    #[arg(short, long)]
    pub file: bool,

    /// Treat the input as a base64 query and print the JSON response the
    /// calculation endpoint would send.
    #[arg(short, long, conflicts_with_all = ["check", "normalize", "tree"])]
    pub base64: bool,

    /// Only print whether the input is a valid expression.
    #[arg(long, conflicts_with_all = ["normalize", "tree"])]
    pub check: bool,

    /// Only print the normalized expression.
    #[arg(long, conflicts_with = "tree")]
    pub normalize: bool,

    /// Print the parsed expression tree instead of its value.
    #[arg(long)]
    pub tree: bool,

    /// Report division by zero as an error instead of an infinity.
    #[arg(long)]
    pub strict_division: bool,

    /// More log output; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// The expression, or the file path with `--file`.
    pub contents: String,
}

/// What to do with each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Solve and print the value.
    Evaluate,
    /// Print `valid` or `invalid`.
    Check,
    /// Print the normalized text.
    Normalize,
    /// Print the parsed tree.
    Tree,
    /// Serve the line as a base64 query.
    Service,
}

/// Settings derived from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// What to do with each line.
    pub mode:      Mode,
    /// Evaluation options.
    pub options:   EvalOptions,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self { mode:      Mode::Evaluate,
               options:   EvalOptions::default(),
               log_level: LevelFilter::Warn, }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let mode = if args.base64 {
            Mode::Service
        } else if args.check {
            Mode::Check
        } else if args.normalize {
            Mode::Normalize
        } else if args.tree {
            Mode::Tree
        } else {
            Mode::Evaluate
        };

        let log_level = if args.quiet {
            LevelFilter::Error
        } else {
            match args.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Self { mode,
               options: EvalOptions { strict_division: args.strict_division },
               log_level }
    }
}

/// The outcome of running one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Text to print.
    pub text:    String,
    /// Whether the line succeeded; failures go to stderr and set the exit
    /// code.
    pub success: bool,
}

impl Report {
    fn ok(text: impl Into<String>) -> Self {
        Self { text:    text.into(),
               success: true, }
    }

    fn error(e: &Error) -> Self {
        Self { text:    e.to_string(),
               success: false, }
    }
}

/// Runs one input line under `config`.
///
/// # Example
/// ```
/// use calculus::cli::{Config, Mode, run_line};
///
/// let config = Config::default();
/// assert_eq!(run_line(&config, "2 * (12 + 12) + 10").text, "58");
///
/// let config = Config { mode: Mode::Check,
///                       ..Config::default() };
/// assert_eq!(run_line(&config, "1 + (4 + 5").text, "invalid");
/// ```
#[must_use]
pub fn run_line(config: &Config, line: &str) -> Report {
    match config.mode {
        Mode::Evaluate => match solve(line, config.options) {
            Ok(value) => Report::ok(value.to_string()),
            Err(e) => Report::error(&e),
        },
        Mode::Check => {
            if is_valid(&normalize(line)) {
                Report::ok("valid")
            } else {
                Report::ok("invalid")
            }
        },
        Mode::Normalize => Report::ok(normalize(line)),
        Mode::Tree => match parse(line) {
            Ok(tree) => Report::ok(tree.to_string()),
            Err(e) => Report::error(&Error::from(e)),
        },
        Mode::Service => {
            let response = calculate(line.trim(), config.options);
            match response.render() {
                Ok(body) => Report { text:    body,
                                     success: response.status.is_success(), },
                Err(e) => Report { text:    e.to_string(),
                                   success: false, },
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use super::{Args, Config, Mode, run_line};

    fn config(args: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("calculus").chain(args.iter().copied()))
            .unwrap();
        Config::from(&args)
    }

    #[test]
    fn flags_select_the_mode() {
        assert_eq!(config(&["1"]).mode, Mode::Evaluate);
        assert_eq!(config(&["--check", "1"]).mode, Mode::Check);
        assert_eq!(config(&["--normalize", "1"]).mode, Mode::Normalize);
        assert_eq!(config(&["--tree", "1"]).mode, Mode::Tree);
        assert_eq!(config(&["-b", "MQ=="]).mode, Mode::Service);
    }

    #[test]
    fn conflicting_modes_are_refused() {
        assert!(Args::try_parse_from(["calculus", "--check", "--tree", "1"]).is_err());
        assert!(Args::try_parse_from(["calculus", "-b", "--normalize", "1"]).is_err());
        assert!(Args::try_parse_from(["calculus", "-v", "-q", "1"]).is_err());
    }

    #[test]
    fn verbosity_maps_to_log_levels() {
        assert_eq!(config(&["1"]).log_level, LevelFilter::Warn);
        assert_eq!(config(&["-v", "1"]).log_level, LevelFilter::Info);
        assert_eq!(config(&["-vv", "1"]).log_level, LevelFilter::Debug);
        assert_eq!(config(&["-vvvv", "1"]).log_level, LevelFilter::Trace);
        assert_eq!(config(&["-q", "1"]).log_level, LevelFilter::Error);
    }

    #[test]
    fn strict_division_flag_reaches_the_options() {
        assert!(config(&["--strict-division", "1/0"]).options.strict_division);
        assert!(!run_line(&config(&["--strict-division", "1/0"]), "1/0").success);
        assert_eq!(run_line(&config(&["1/0"]), "1/0").text, "inf");
    }

    #[test]
    fn each_mode_prints_its_own_view() {
        assert_eq!(run_line(&config(&["--normalize", "x"]), "1 (2)").text, "1*(2)");
        assert_eq!(run_line(&config(&["--tree", "x"]), "1 (2)").text, "(1 * 2)");
        assert_eq!(run_line(&config(&["--check", "x"]), "1 (2)").text, "valid");
        assert_eq!(run_line(&config(&["x"]), "4.5+2.3").text, "6.8");
    }

    #[test]
    fn invalid_expressions_fail() {
        let report = run_line(&config(&["x"]), "bad query");
        assert!(!report.success);
        assert_eq!(report.text, "Invalid expression: badquery");
    }

    #[test]
    fn long_lines_are_handled_in_every_mode() {
        let line = vec!["1"; 100_000].join("+");
        assert_eq!(run_line(&config(&["x"]), &line).text, "100000");
        assert!(run_line(&config(&["--tree", "x"]), &line).text.ends_with(" + 1)"));
        assert_eq!(run_line(&config(&["--check", "x"]), &line).text, "valid");
    }

    #[test]
    fn service_mode_prints_the_response_body() {
        let report = run_line(&config(&["-b", "x"]), "NC41KzIuMw==");
        assert!(report.success);
        assert_eq!(report.text, r#"{"result":6.8,"error":false}"#);
    }
}

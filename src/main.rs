use std::{fs, process::ExitCode};

use calculus::cli::{Args, Config, run_line};
use clap::Parser;
use env_logger::Env;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.to_string()))
        .init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let lines: Vec<&str> = if args.file {
        script.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![script.as_str()]
    };

    let mut failed = false;
    for line in lines {
        let report = run_line(&config, line);
        if report.success {
            println!("{}", report.text);
        } else {
            eprintln!("{}", report.text);
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

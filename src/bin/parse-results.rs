//! Command-line interface for parse-results
//! This binary reads a results file of `key:value` lines and prints each
//! parsed pair as `key = value`, skipping malformed lines.
//!
//! Usage:
//!   parse-results `<results.txt>`              - Print the parsed parameters
//!   parse-results --verbose `<results.txt>`    - Also report lines that fail to parse

use clap::{Arg, ArgAction, Command};
use parse_results::results::ResultsLoader;

fn main() {
    let matches = Command::new("parse-results")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a key:value results file and print its parameters")
        .arg(Arg::new("path").help("Path to the results file").index(1))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Report lines that fail to parse on stderr")
                .action(ArgAction::SetTrue),
        )
        // Anything after the path is accepted and ignored.
        .arg(Arg::new("extra").index(2).num_args(0..).hide(true))
        .get_matches();

    // Missing path prints usage and exits 0; historical behavior kept as-is.
    let Some(path) = matches.get_one::<String>("path") else {
        println!("Usage: parse-results <results.txt>");
        return;
    };

    let loader = ResultsLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let params = if matches.get_flag("verbose") {
        loader.params_reporting(|line| eprintln!("Failed to parse '{}'", line))
    } else {
        loader.params()
    };

    for (key, value) in &params {
        println!("{} = {}", key, value);
    }
}

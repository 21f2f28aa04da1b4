//! plainjson CLI.
//!
//! Thin wrapper over the library: reads JSON from a file or stdin and
//! parses, tokenizes, or validates it. Contains no parsing logic of its own.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use plainjson::{parse, to_string, tokenize};

#[derive(Parser)]
#[command(name = "plainjson")]
#[command(about = "Strict JSON parser and validator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse input and print the compact serialized value
    Parse {
        /// Input file; stdin if omitted
        file: Option<PathBuf>,
    },

    /// Tokenize input and print one token per line
    Lex {
        /// Input file; stdin if omitted
        file: Option<PathBuf>,
    },

    /// Validate input, printing "ok" on success
    Check {
        /// Input file; stdin if omitted
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file = match &cli.command {
        Commands::Parse { file } | Commands::Lex { file } | Commands::Check { file } => {
            file.clone()
        }
    };

    let input = match read_input(file.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Parse { .. } => match parse(&input) {
            Ok(value) => {
                println!("{}", to_string(&value));
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Commands::Lex { .. } => match tokenize(&input) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token:?}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Commands::Check { .. } => match parse(&input) {
            Ok(_) => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

//! gridcalc - resolves cell references and formulas in delimited text tables.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gridcalc_core::{DEFAULT_DELIMITER, Table, render_padded};

fn print_usage() {
    eprintln!("Usage: gridcalc [OPTIONS] <FILE>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <FILE>                    Delimited table file to resolve");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --delimiter <CHAR>    Field delimiter (default: ',')");
    eprintln!("  -h, --help                Print help");
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut delimiter = DEFAULT_DELIMITER;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-d" | "--delimiter" => {
                i += 1;
                let mut chars = args.get(i).map(|s| s.chars()).unwrap_or("".chars());
                match (chars.next(), chars.next()) {
                    (Some(c), None) => delimiter = c,
                    _ => {
                        eprintln!("Error: --delimiter requires a single character");
                        std::process::exit(2);
                    }
                }
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(2);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(2);
                }
            }
        }
        i += 1;
    }

    // The input path is required configuration; there is no default.
    let Some(file_path) = file_path else {
        eprintln!("Error: missing input file");
        print_usage();
        std::process::exit(2);
    };

    match run(&file_path, delimiter) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(path: &Path, delimiter: char) -> anyhow::Result<String> {
    let mut table = Table::load(path, delimiter)
        .with_context(|| format!("failed to load {}", path.display()))?;
    table.resolve();
    Ok(render_padded(table.grid()))
}

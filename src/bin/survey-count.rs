//! CLI tool to load NSFG survey extracts and report record counts.
//!
//! Usage:
//!   survey-count --respondents 2002FemResp.dat.gz --pregnancies 2002FemPreg.dat.gz
//!
//! Both files may be plain text or gzip-compressed (`.gz` suffix).
//! Either file may be omitted to count just the other.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use survey_tables_rs::{RecordTable, nsfg};

#[derive(Parser)]
#[command(name = "survey-count", about = "Count records in NSFG survey extracts")]
struct Args {
    /// Respondent file (2002FemResp.dat or .dat.gz)
    #[arg(long, short = 'r')]
    respondents: Option<PathBuf>,

    /// Pregnancy file (2002FemPreg.dat or .dat.gz)
    #[arg(long, short = 'p')]
    pregnancies: Option<PathBuf>,
}

fn load(mut table: RecordTable, path: &PathBuf) -> RecordTable {
    if let Err(e) = table.load_from_file(path) {
        eprintln!("Error loading {} file: {e}", table.shape());
        process::exit(1);
    }
    table
}

fn main() {
    let args = Args::parse();

    if args.respondents.is_none() && args.pregnancies.is_none() {
        eprintln!("Nothing to do: pass --respondents and/or --pregnancies");
        process::exit(1);
    }

    if let Some(path) = &args.respondents {
        let table = load(nsfg::respondents(), path);
        println!("Number of respondents: {}", table.len());
    }

    if let Some(path) = &args.pregnancies {
        let table = load(nsfg::pregnancies(), path);
        println!("Number of pregnancies: {}", table.len());
    }
}

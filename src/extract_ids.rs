/*
cargo run --bin extract_ids -- \
    -i log_subject_20250220_114411.txt \
    -o ids.txt
*/

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bgm_dataprep::logscan::extract_ids;

// Pull failed-fetch subject ids out of a scraper log
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Scraper log file
    #[arg(short, long)]
    input: PathBuf,

    // Output file, one id per line
    #[arg(short, long, default_value = "ids.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read log file {:?}", args.input))?;
    let ids = extract_ids(&text);

    std::fs::write(&args.output, ids.join("\n"))
        .with_context(|| format!("Cannot write {:?}", args.output))?;
    println!("Extracted {} id(s) → {}", ids.len(), args.output.display());

    Ok(())
}

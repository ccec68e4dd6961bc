/*
cargo run --bin collect_stats -- --dir user_data
*/

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use walkdir::WalkDir;

// Census of per-user collect files: how many exist and how large they run
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Directory tree holding the per-user data files
    #[arg(long, default_value = "user_data")]
    dir: PathBuf,

    // File name to count
    #[arg(long, default_value = "2_collect.json")]
    file_name: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut total_files = 0usize;
    let mut more_than_100 = 0usize;
    let mut more_than_1000 = 0usize;
    let mut more_than_10000 = 0usize;

    for entry in WalkDir::new(&args.dir) {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() != args.file_name.as_str() {
            continue;
        }
        total_files += 1;

        let file = File::open(entry.path())
            .with_context(|| format!("Cannot open {:?}", entry.path()))?;
        let lines = BufReader::new(file).lines().count();
        if lines > 100 {
            more_than_100 += 1;
        }
        if lines > 1000 {
            more_than_1000 += 1;
        }
        if lines > 10000 {
            more_than_10000 += 1;
        }
    }

    println!("Total '{}' files: {}", args.file_name, total_files);
    println!("Files with more than 100 lines: {}", more_than_100);
    println!("Files with more than 1000 lines: {}", more_than_1000);
    println!("Files with more than 10000 lines: {}", more_than_10000);

    Ok(())
}

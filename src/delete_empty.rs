/*
cargo run --bin delete_empty -- --dir user_data
*/

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use bgm_dataprep::tidy::{delete_empty_dirs, delete_empty_json_files};

// Remove placeholder .json files and the directories they leave empty
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Directory tree to clean
    #[arg(long, default_value = "user_data")]
    dir: PathBuf,

    // Byte size of a placeholder "empty" JSON document
    #[arg(long, default_value = "18")]
    placeholder_size: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let deleted = delete_empty_json_files(&args.dir, args.placeholder_size)?;
    for path in &deleted {
        println!("Deleted: {}", path.display());
    }

    let removed = delete_empty_dirs(&args.dir)?;
    for path in &removed {
        println!("Deleted empty directory: {}", path.display());
    }

    println!(
        "Removed {} file(s) and {} directories under {}",
        deleted.len(),
        removed.len(),
        args.dir.display()
    );
    Ok(())
}

/*
cargo run --bin split_interactions -- \
    --input data/sampled_positive_interaction.txt \
    --train-file data/train_interaction.txt \
    --test-file data/test_interaction.txt
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use bgm_dataprep::split::{merge_interactions, split_user};
use rand::rngs::StdRng;
use rand::SeedableRng;

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "Split interaction lines into train and test sets")]
struct Cli {
    // Interaction file: "<user_id> <item_id> ..." per line
    #[arg(long, default_value = "data/sampled_positive_interaction.txt")]
    input: PathBuf,

    #[arg(long, default_value = "data/train_interaction.txt")]
    train_file: PathBuf,

    #[arg(long, default_value = "data/test_interaction.txt")]
    test_file: PathBuf,

    // Fraction of each user's interactions assigned to train
    #[arg(short = 'r', long, default_value = "0.8")]
    train_ratio: f64,

    // A side with fewer unique items than this is replaced by the user's
    // full unique interaction set
    #[arg(long, default_value = "3")]
    min_unique: usize,

    // Fix the RNG for reproducible splits
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.train_ratio) {
        eprintln!("Train ratio must lie in [0, 1]. Got: {}", cli.train_ratio);
        std::process::exit(1);
    }

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("split_interactions_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting train/test split");
    info!("Input file: {:?}", cli.input);
    info!(
        "Train ratio: {}, unique-item floor: {}",
        cli.train_ratio, cli.min_unique
    );

    // load and group by user
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Cannot read interaction file {:?}", cli.input))?;
    let users = merge_interactions(&text)?;
    info!("Loaded {} users", users.len());

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // split and write
    if let Some(parent) = cli.train_file.parent() {
        create_dir_all(parent)?;
    }
    if let Some(parent) = cli.test_file.parent() {
        create_dir_all(parent)?;
    }
    let mut train_out = BufWriter::new(
        File::create(&cli.train_file)
            .with_context(|| format!("Cannot create {:?}", cli.train_file))?,
    );
    let mut test_out = BufWriter::new(
        File::create(&cli.test_file)
            .with_context(|| format!("Cannot create {:?}", cli.test_file))?,
    );

    let mut fallbacks = 0usize;
    for (user_id, items) in &users {
        let (train, test) = split_user(items, cli.train_ratio, cli.min_unique, &mut rng);
        if train.len() + test.len() != items.len() {
            fallbacks += 1;
        }
        write_line(&mut train_out, *user_id, &train)?;
        write_line(&mut test_out, *user_id, &test)?;
    }
    train_out.flush()?;
    test_out.flush()?;

    if fallbacks > 0 {
        warn!(
            "{} user(s) fell below the unique-item floor; their sides were \
             replaced by the full unique set",
            fallbacks
        );
    }
    info!("Wrote train set → {:?}", cli.train_file);
    info!("Wrote test set → {:?}", cli.test_file);

    println!("\n=== Split summary ===");
    println!("Users split        : {}", users.len());
    println!("Floor fallbacks    : {}", fallbacks);
    println!("Train file         : {:?}", cli.train_file);
    println!("Test file          : {:?}", cli.test_file);
    println!("Log file           : {:?}", log_path);

    Ok(())
}

fn write_line(out: &mut impl Write, user_id: u64, items: &[u64]) -> Result<()> {
    let mut parts = vec![user_id.to_string()];
    parts.extend(items.iter().map(|id| id.to_string()));
    writeln!(out, "{}", parts.join(" "))?;
    Ok(())
}

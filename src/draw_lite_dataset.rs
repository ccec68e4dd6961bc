/*
cargo run --bin draw_lite_dataset -- \
    --input data/user.json \
    --output data/sampled_users_by_proportion.json \
    --target-size 5000
*/

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use serde_json::Value;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use bgm_dataprep::sample::{draw_proportional, partition_by_tier, Tier};
use rand::rngs::StdRng;
use rand::SeedableRng;

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "Draw a tier-proportional user sample from the full population")]
struct Cli {
    // Full population JSON (array of user records)
    #[arg(long, default_value = "data/user.json")]
    input: PathBuf,

    // Where the sampled population is written
    #[arg(long, default_value = "data/sampled_users_by_proportion.json")]
    output: PathBuf,

    // Total number of users to draw across all tiers
    #[arg(long, default_value = "5000")]
    target_size: usize,

    // Fix the RNG for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("draw_lite_dataset_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting proportional user sampling");
    info!("Input file: {:?}", cli.input);
    info!("Target sample size: {}", cli.target_size);

    // load population
    let file = File::open(&cli.input)
        .with_context(|| format!("Cannot open population file {:?}", cli.input))?;
    let users: Vec<Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| "Population file must be a JSON array of user records")?;
    let total_users = users.len();
    info!("Loaded {} users", total_users);

    // tier census
    let tiers = partition_by_tier(users);
    let total_valid: usize = tiers.iter().map(Vec::len).sum();
    if total_valid == 0 {
        bail!("Population file {:?} holds no users", cli.input);
    }
    for (tier, tier_users) in Tier::ALL.iter().zip(&tiers) {
        info!(
            "{} users: {} ({:.2}%)",
            tier.label(),
            tier_users.len(),
            100.0 * tier_users.len() as f64 / total_valid as f64
        );
    }

    // draw
    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sampled = draw_proportional(tiers, cli.target_size, &mut rng);
    info!("Drew {} users", sampled.len());

    // write
    if let Some(parent) = cli.output.parent() {
        create_dir_all(parent)?;
    }
    let out = File::create(&cli.output)
        .with_context(|| format!("Cannot create {:?}", cli.output))?;
    serde_json::to_writer_pretty(BufWriter::new(out), &sampled)?;
    info!("Wrote sampled population → {:?}", cli.output);

    println!("\n=== Sampling summary ===");
    println!("Total users        : {}", total_users);
    println!("Sampled users      : {}", sampled.len());
    println!("Output JSON        : {:?}", cli.output);
    println!("Log file           : {:?}", log_path);

    Ok(())
}

/*
cargo run --bin positive_interactions -- \
    --input data/sampled_users_by_proportion.json \
    --output data/sampled_positive_interaction.txt
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::io::BufReader;
use std::path::PathBuf;

use bgm_dataprep::label::{interaction_line, UserRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "Derive positive-interaction lines from user records")]
struct Cli {
    // User JSON (array), raw or sampled
    #[arg(long, default_value = "data/sampled_users_by_proportion.json")]
    input: PathBuf,

    // One line per user: "<user_id> <liked item ids>"
    #[arg(long, default_value = "data/sampled_positive_interaction.txt")]
    output: PathBuf,

    // Fix the RNG used by the empty-set fallback
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
    let log_path = cli.log_dir.join(format!("positive_interactions_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting positive-feedback labelling");
    info!("Input file: {:?}", cli.input);

    // load users
    let file = File::open(&cli.input)
        .with_context(|| format!("Cannot open user file {:?}", cli.input))?;
    let users: Vec<UserRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| "User file must be a JSON array of user records")?;
    info!("Loaded {} users", users.len());

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let bar = ProgressBar::new(users.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
    )?);

    let mut lines = Vec::with_capacity(users.len());
    for user in &users {
        lines.push(interaction_line(user, &mut rng));
        bar.inc(1);
    }
    bar.finish_and_clear();

    // write
    if let Some(parent) = cli.output.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(&cli.output, lines.join("\n"))
        .with_context(|| format!("Cannot write {:?}", cli.output))?;
    info!("Wrote {} interaction lines → {:?}", lines.len(), cli.output);

    println!("\n=== Labelling summary ===");
    println!("Users processed    : {}", users.len());
    println!("Output file        : {:?}", cli.output);
    println!("Log file           : {:?}", log_path);

    Ok(())
}

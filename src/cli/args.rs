use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "order_pipeline")]
#[command(about = "A bounded producer-consumer pipeline for simulated order processing")]
#[command(version)]
pub struct Cli {
    /// Number of orders to generate
    #[arg(short = 'n', long, default_value = "20")]
    pub count: usize,

    /// Bounded channel capacity
    #[arg(short, long, default_value = "20")]
    pub capacity: usize,

    /// Upper bound for the per-order delay in milliseconds (exclusive)
    #[arg(long, default_value = "500")]
    pub max_delay_ms: u64,

    /// Seed for the delay RNG (reproducible runs)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress all console output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON run report to this path after completion
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

use std::path::PathBuf;

use clap::Parser;
use tfrrs_scraping::history::{cutoff_series, DEFAULT_CUTOFF_RANK};

/// Shows how the qualifying mark of one event moved across the recorded snapshots.
#[derive(Parser)]
struct Opts {
    /// Part of the event title, e.g. `Mile`.
    event: String,
    /// `Men` or `Women`.
    gender: String,
    #[arg(long, default_value_t = DEFAULT_CUTOFF_RANK)]
    cutoff_rank: u32,
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let series = cutoff_series(&opts.data_dir, &opts.event, &opts.gender, opts.cutoff_rank)?;
    if series.is_empty() {
        println!(
            "No snapshot has a rank-{} mark for {} ({}).",
            opts.cutoff_rank, opts.event, opts.gender
        );
    }
    for point in &series {
        println!(
            "{}  {:>9}  ({:.2}s)",
            point.date(),
            point.mark().to_string(),
            point.mark().seconds()
        );
    }
    Ok(())
}

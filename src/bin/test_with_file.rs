use std::path::PathBuf;

use clap::Parser;
use scraper::Html;
use tfrrs_scraping::{parser, ranking::DEFAULT_TOP_N};

/// Parses a saved copy of the ranking list and prints the resulting snapshot.
#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);
    let snapshot = parser::parse(&html, opts.top_n);
    for ranking in &snapshot {
        println!("{} ({} entries)", ranking.event, ranking.rankings.len());
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

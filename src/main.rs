use std::path::PathBuf;

use clap::Parser;
use tfrrs_scraping::{
    chrono_util::{iso_date, today},
    config::Config,
    pipeline,
};

#[derive(Parser)]
struct Opts {
    /// TOML file overriding the built-in settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    let config = Config::load(opts.config.as_deref())?;
    pipeline::run(&config, &iso_date(today()))?;
    Ok(())
}

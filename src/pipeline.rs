use log::info;
use scraper::Html;

use crate::{
    api::{fetch_ranking_list, reqwest_client},
    config::Config,
    manifest::{self, ManifestUpdate},
    parser,
    snapshot::{manifest_path, snapshot_path, write_snapshot},
};

/// One scraping run: fetch, parse, write the snapshot for `date`, record `date`.
/// Nothing is written when the fetch fails.
pub fn run(config: &Config, date: &str) -> anyhow::Result<ManifestUpdate> {
    let client = reqwest_client(config)?;
    let markup = match fetch_ranking_list(&client, &config.url) {
        Ok(markup) => {
            println!("Success!");
            markup
        }
        Err(e) => {
            println!("Error: {e}");
            return Err(e.into());
        }
    };

    let snapshot = parser::parse(&Html::parse_document(&markup), config.top_n);
    info!("Found {} events.", snapshot.len());

    let path = snapshot_path(&config.data_dir, date);
    write_snapshot(&path, &snapshot)?;
    println!("Data exported to {}.", path.display());

    let manifest = manifest_path(&config.data_dir);
    let update = manifest::update(&manifest, date)?;
    match update {
        ManifestUpdate::Added => {
            println!("Updated manifest: {date} added to {}.", manifest.display())
        }
        ManifestUpdate::AlreadyPresent => {
            println!("Manifest up to date: {date} already exists.")
        }
    }
    Ok(update)
}

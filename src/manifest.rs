//! The manifest is the sorted list of every date a snapshot was taken,
//! used to locate snapshots for the history view.

use std::{io, path::Path};

use log::{info, warn};
use tfrrs_scraping_utils::fs_json_util::write_json_pretty;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ManifestUpdate {
    Added,
    AlreadyPresent,
}

/// Loads the manifest at `path`.
/// A missing or malformed file is treated as an empty manifest;
/// any other I/O failure is returned so that the history is never overwritten.
pub fn load_manifest(path: &Path) -> io::Result<Vec<String>> {
    let text = match fs_err::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Manifest {path:?} was not found.  A new one will be created.");
            return Ok(vec![]);
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("Manifest {path:?} is not UTF-8, starting from an empty one: {e}");
            return Ok(vec![]);
        }
        Err(e) => return Err(e),
    };
    Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
        warn!("Manifest {path:?} is corrupted, starting from an empty one: {e}");
        vec![]
    }))
}

/// Inserts `date` keeping `dates` sorted.  Returns `false` if it was already there.
pub fn insert_date(dates: &mut Vec<String>, date: &str) -> bool {
    if dates.iter().any(|d| d == date) {
        return false;
    }
    dates.push(date.to_owned());
    dates.sort();
    true
}

/// Records `date` in the manifest at `path`.
/// The file is left untouched when the date is already recorded.
pub fn update(path: &Path, date: &str) -> anyhow::Result<ManifestUpdate> {
    let mut dates = load_manifest(path)?;
    if !insert_date(&mut dates, date) {
        return Ok(ManifestUpdate::AlreadyPresent);
    }
    write_json_pretty(path, &dates)?;
    Ok(ManifestUpdate::Added)
}

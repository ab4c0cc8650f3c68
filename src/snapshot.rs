use std::path::{Path, PathBuf};

use anyhow::Context;
use tfrrs_scraping_utils::fs_json_util::{read_json, write_json_pretty};

use crate::schema::{EventRanking, Snapshot};

pub const MANIFEST_FILE_NAME: &str = "dates.json";

pub fn snapshot_path(data_dir: &Path, date: &str) -> PathBuf {
    data_dir.join(format!("tfrrs_data ({date}).json"))
}

pub fn manifest_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MANIFEST_FILE_NAME)
}

/// Writes the whole snapshot, creating the parent directory if needed.
pub fn write_snapshot(path: &Path, snapshot: &[EventRanking]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    write_json_pretty(path, &snapshot)
        .with_context(|| format!("While writing snapshot to {path:?}"))
}

pub fn read_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{manifest_path, read_snapshot, snapshot_path, write_snapshot};
    use crate::schema::{EventRanking, RankingEntry};

    #[test]
    fn file_names() {
        let dir = Path::new("./data");
        assert_eq!(
            snapshot_path(dir, "2026-01-15"),
            Path::new("./data/tfrrs_data (2026-01-15).json")
        );
        assert_eq!(manifest_path(dir), Path::new("./data/dates.json"));
    }

    #[test]
    fn writes_pretty_unescaped_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir.path().join("data"), "2026-01-15");
        let snapshot = vec![EventRanking {
            event: "Mile".to_owned().into(),
            rankings: vec![RankingEntry {
                rank: 1,
                athlete: "Søren Ødegård".to_owned().into(),
                time: "4:01.20".to_owned().into(),
            }],
        }];
        write_snapshot(&path, &snapshot).unwrap();

        let text = fs_err::read_to_string(&path).unwrap();
        assert!(text.contains("Søren Ødegård"));
        assert!(text.starts_with("[\n    {\n        \"event\": \"Mile\","));
        assert_eq!(read_snapshot(&path).unwrap(), snapshot);
    }
}

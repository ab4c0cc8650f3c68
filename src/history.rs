use std::path::Path;

use getset::{CopyGetters, Getters};
use log::{debug, warn};
use tfrrs_scraping_utils::fs_json_util::read_json;

use crate::{
    mark::{parse_mark, Mark},
    schema::EventRanking,
    snapshot::{manifest_path, read_snapshot, snapshot_path},
};

/// Number of athletes who qualify for the championship from the list.
pub const DEFAULT_CUTOFF_RANK: u32 = 16;

#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct CutoffPoint {
    #[getset(get = "pub")]
    date: String,
    #[getset(get_copy = "pub")]
    mark: Mark,
}

/// Event titles on the list combine the event and the gender (e.g. `Mile Men`),
/// so both are matched as substrings.
pub fn find_event<'a>(
    snapshot: &'a [EventRanking],
    event: &str,
    gender: &str,
) -> Option<&'a EventRanking> {
    snapshot.iter().find(|ranking| {
        let name: &str = ranking.event.as_ref();
        name.contains(event) && name.contains(gender)
    })
}

pub fn cutoff_mark(ranking: &EventRanking, cutoff_rank: u32) -> Option<Mark> {
    let entry = ranking.rankings.iter().find(|e| e.rank == cutoff_rank)?;
    parse_mark(entry.time.as_ref())
}

/// The mark at `cutoff_rank` on every recorded date, oldest first.
/// Dates whose snapshot lacks the event or a usable cutoff entry are left out.
pub fn cutoff_series(
    data_dir: &Path,
    event: &str,
    gender: &str,
    cutoff_rank: u32,
) -> anyhow::Result<Vec<CutoffPoint>> {
    let dates: Vec<String> = read_json(manifest_path(data_dir))?;
    let mut points = vec![];
    for date in dates {
        let snapshot = match read_snapshot(&snapshot_path(data_dir, &date)) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Skipping {date}: {e:#}");
                continue;
            }
        };
        let Some(ranking) = find_event(&snapshot, event, gender) else {
            debug!("{date}: no event matching {event:?} / {gender:?}");
            continue;
        };
        match cutoff_mark(ranking, cutoff_rank) {
            Some(mark) => points.push(CutoffPoint { date, mark }),
            None => debug!("{date}: no usable mark at rank {cutoff_rank}"),
        }
    }
    points.sort_by(|x, y| x.date.cmp(&y.date));
    Ok(points)
}

use indexmap::IndexMap;

use crate::{
    parser::{EventSection, RawRow},
    schema::{EventName, EventRanking, RankingEntry},
};

/// How many entries of each event are kept in a snapshot.
/// The qualifying cutoff used by the history view is a separate number,
/// see [`crate::history::DEFAULT_CUTOFF_RANK`].
pub const DEFAULT_TOP_N: usize = 20;

/// Merges sections sharing an event name.
/// Events keep the order in which they were first seen, and rows keep page order.
pub fn group_sections(
    sections: impl IntoIterator<Item = EventSection>,
) -> IndexMap<EventName, Vec<RawRow>> {
    let mut groups = IndexMap::<_, Vec<_>>::new();
    for section in sections {
        groups.entry(section.event).or_default().extend(section.rows);
    }
    groups
}

pub fn rank_sections(
    sections: impl IntoIterator<Item = EventSection>,
    top_n: usize,
) -> Vec<EventRanking> {
    group_sections(sections)
        .into_iter()
        .map(|(event, rows)| EventRanking {
            event,
            rankings: rank_rows(rows, top_n),
        })
        .collect()
}

fn rank_rows(rows: Vec<RawRow>, top_n: usize) -> Vec<RankingEntry> {
    (1..)
        .zip(rows.into_iter().take(top_n))
        .map(|(rank, RawRow { athlete, time })| RankingEntry {
            rank,
            athlete,
            time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{group_sections, rank_sections, DEFAULT_TOP_N};
    use crate::parser::{EventSection, RawRow};

    fn section(event: &str, athletes: &[&str]) -> EventSection {
        EventSection {
            event: event.to_owned().into(),
            rows: athletes
                .iter()
                .map(|&athlete| RawRow {
                    athlete: athlete.to_owned().into(),
                    time: format!("{athlete}-time").into(),
                })
                .collect(),
        }
    }

    fn athletes(sections: Vec<EventSection>, top_n: usize) -> Vec<(String, Vec<(u32, String)>)> {
        rank_sections(sections, top_n)
            .into_iter()
            .map(|ranking| {
                (
                    ranking.event.to_string(),
                    ranking
                        .rankings
                        .into_iter()
                        .map(|entry| (entry.rank, entry.athlete.to_string()))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn truncates_to_top_n_in_page_order() {
        let names = (0..25).map(|i| format!("Z{i:02}")).collect_vec();
        let names = names.iter().rev().map(String::as_str).collect_vec();
        let ranked = athletes(vec![section("3000 Meters", &names)], DEFAULT_TOP_N);
        let (_, entries) = &ranked[0];
        assert_eq!(entries.len(), DEFAULT_TOP_N);
        assert_eq!(entries[0], (1, "Z24".to_owned()));
        assert_eq!(entries[19], (20, "Z05".to_owned()));
        assert!(entries.iter().map(|x| x.0).eq(1..=20));
    }

    #[test]
    fn short_events_are_ranked_contiguously() {
        let ranked = athletes(vec![section("Mile", &["B", "A"])], 16);
        assert_eq!(
            ranked,
            vec![("Mile".to_owned(), vec![(1, "B".to_owned()), (2, "A".to_owned())])]
        );
    }

    #[test]
    fn keeps_first_seen_event_order() {
        let ranked = athletes(
            vec![
                section("Weight Throw", &["W"]),
                section("60 Meters", &["S"]),
                section("Mile", &["M"]),
            ],
            20,
        );
        let events = ranked.iter().map(|x| x.0.as_str()).collect_vec();
        assert_eq!(events, ["Weight Throw", "60 Meters", "Mile"]);
    }

    #[test]
    fn same_named_sections_are_merged() {
        let groups = group_sections(vec![
            section("Mile", &["A", "B"]),
            section("60 Meters", &["S"]),
            section("Mile", &["C"]),
        ]);
        assert_eq!(groups.len(), 2);
        let mile = groups
            .values()
            .next()
            .unwrap()
            .iter()
            .map(|row| row.athlete.to_string())
            .collect_vec();
        assert_eq!(mile, ["A", "B", "C"]);
    }

    #[test]
    fn empty_sections_still_produce_an_event() {
        let ranked = athletes(vec![section("Pole Vault", &[])], 20);
        assert_eq!(ranked, vec![("Pole Vault".to_owned(), vec![])]);
    }

    #[test]
    fn zero_depth_keeps_events_but_no_entries() {
        let ranked = athletes(vec![section("Mile", &["A"])], 0);
        assert_eq!(ranked, vec![("Mile".to_owned(), vec![])]);
    }
}

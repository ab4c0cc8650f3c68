//! Extraction of event sections from the TFRRS qualifying-list page.
//!
//! The page is a flat sequence of blocks: a `div.custom-table-title` holding the
//! event name in an `h3`, followed by a `div.performance-list` whose
//! `div.performance-list-row` children are the results. Fields inside a row are
//! found by their `data-label` attribute, not by position.

use log::warn;
use scraper::{ElementRef, Html};
use tfrrs_scraping_utils::selector;

use crate::{
    ranking::rank_sections,
    schema::{AthleteName, EventName, EventRanking, MarkText},
};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawRow {
    pub athlete: AthleteName,
    pub time: MarkText,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EventSection {
    pub event: EventName,
    pub rows: Vec<RawRow>,
}

/// Parses the ranking list and keeps at most `top_n` entries per event.
///
/// Rows are assumed to already be listed in rank order on the page;
/// ranks are assigned by position and never derived from the marks.
pub fn parse(html: &Html, top_n: usize) -> Vec<EventRanking> {
    rank_sections(parse_sections(html), top_n)
}

pub fn parse_str(markup: &str, top_n: usize) -> Vec<EventRanking> {
    parse(&Html::parse_document(markup), top_n)
}

/// All event sections in document order.
/// Sections whose title lacks an `h3` are skipped.
pub fn parse_sections(html: &Html) -> Vec<EventSection> {
    html.select(selector!("div.custom-table-title"))
        .filter_map(parse_section)
        .collect()
}

fn parse_section(title: ElementRef) -> Option<EventSection> {
    let Some(heading) = title.select(selector!("h3")).next() else {
        warn!("Event title without h3, skipping: {}", title.html());
        return None;
    };
    let event: EventName = stripped_text(heading).into();
    let rows = match find_results(title) {
        Some(results) => results
            .select(selector!("div.performance-list-row"))
            .map(parse_row)
            .collect(),
        None => {
            warn!("No results list follows the title of {event}");
            vec![]
        }
    };
    Some(EventSection { event, rows })
}

/// The results list belonging to `title`: the first following sibling
/// `div.performance-list` that comes before the next event title.
fn find_results(title: ElementRef) -> Option<ElementRef> {
    title
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|e| !selector!("div.custom-table-title").matches(e))
        .find(|e| selector!("div.performance-list").matches(e))
}

fn parse_row(row: ElementRef) -> RawRow {
    let athlete = row
        .select(selector!(r#"div[data-label="Athlete"]"#))
        .next()
        .map_or_else(AthleteName::not_available, |div| stripped_text(div).into());
    let time = row
        .select(selector!(r#"div[data-label="Time"]"#))
        .next()
        .map_or_else(MarkText::not_available, |div| stripped_text(div).into());
    RawRow { athlete, time }
}

/// Text of `elem` with every text node trimmed, concatenated without separators.
pub fn stripped_text(elem: ElementRef) -> String {
    elem.text().map(str::trim).collect()
}

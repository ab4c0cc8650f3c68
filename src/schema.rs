use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

/// Written in place of a field that could not be found in a row.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(
    Clone, PartialEq, Eq, Hash, Debug, From, AsRef, Display, Serialize, Deserialize,
)]
#[as_ref(forward)]
pub struct EventName(String);

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct AthleteName(String);

/// A time or mark exactly as printed on the page, e.g. `4:01.20` or `7.45m`.
#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct MarkText(String);

macro_rules! not_available {
    ($($t: ty),*) => {
        $(
            impl $t {
                pub fn not_available() -> Self {
                    Self(NOT_AVAILABLE.to_owned())
                }
            }
        )*
    };
}
not_available!(AthleteName, MarkText);

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub athlete: AthleteName,
    pub time: MarkText,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EventRanking {
    pub event: EventName,
    pub rankings: Vec<RankingEntry>,
}

/// Everything captured from one fetch of the ranking list.
pub type Snapshot = Vec<EventRanking>;

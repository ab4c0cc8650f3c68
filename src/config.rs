use std::path::{Path, PathBuf};

use serde::Deserialize;
use tfrrs_scraping_utils::fs_json_util::read_toml;

use crate::ranking::DEFAULT_TOP_N;

pub const DEFAULT_URL: &str =
    "https://tf.tfrrs.org/lists/5352/2025_2026_NCAA_Division_I_Indoor_Qualifying_List?gender=";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";
pub const DEFAULT_REFERER: &str = "https://www.tfrrs.org/";

/// Settings of a scraping run.  Every field may be omitted from the TOML file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub data_dir: PathBuf,
    /// Entries kept per event.
    pub top_n: usize,
    pub user_agent: String,
    pub accept: String,
    pub referer: String,
    /// No timeout when absent.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            data_dir: PathBuf::from("./data"),
            top_n: DEFAULT_TOP_N,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept: DEFAULT_ACCEPT.to_owned(),
            referer: DEFAULT_REFERER.to_owned(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => read_toml(path),
            None => Ok(Self::default()),
        }
    }
}

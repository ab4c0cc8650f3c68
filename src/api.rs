use std::time::Duration;

use log::info;
use reqwest::{
    blocking::Client,
    header::{self, HeaderMap, HeaderValue},
    StatusCode,
};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("The server responded with {0}")]
    Status(StatusCode),
    #[error("The request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A client that presents itself as a desktop browser coming from the TFRRS top page;
/// the list rejects requests that do not.
pub fn reqwest_client(config: &Config) -> anyhow::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_str(&config.accept)?);
    headers.insert(header::REFERER, HeaderValue::from_str(&config.referer)?);
    Ok(Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .timeout(config.timeout_secs.map(Duration::from_secs))
        .build()?)
}

/// Downloads the ranking list page and returns its markup.
pub fn fetch_ranking_list(client: &Client, url: &str) -> Result<String, FetchError> {
    info!("Fetching {url}");
    let response = client.get(url).send()?;
    match response.status() {
        StatusCode::OK => Ok(response.text()?),
        status => Err(FetchError::Status(status)),
    }
}

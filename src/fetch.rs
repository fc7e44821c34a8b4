// src/fetch.rs

use reqwest::blocking::Client;
use std::fs;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::Source;
use crate::error::ScrapeError;

/// Plain blocking client: no custom headers, library default timeout.
pub fn build_client() -> Result<Client, ScrapeError> {
    Client::builder().build().map_err(|e| ScrapeError::Fetch {
        target: "http client".to_string(),
        source: Box::new(e),
    })
}

/// GET `url` and return the body unvalidated. Non-2xx statuses are failures.
#[instrument(skip_all, fields(url = %url))]
pub fn fetch(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    debug!("Fetching text from {}", url);
    let result = client
        .get(url.clone())
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text());

    match result {
        Ok(body) => {
            debug!(bytes = body.len(), "fetched");
            Ok(body)
        }
        Err(e) => {
            warn!(error = %e, "fetch failed");
            Err(ScrapeError::Fetch {
                target: url.to_string(),
                source: Box::new(e),
            })
        }
    }
}

/// Read page markup from wherever `source` points.
pub fn load(client: &Client, source: &Source) -> Result<String, ScrapeError> {
    match source {
        Source::Url(url) => fetch(client, url),
        Source::File(path) => fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "reading saved page failed");
            ScrapeError::Fetch {
                target: path.display().to_string(),
                source: Box::new(e),
            }
        }),
    }
}

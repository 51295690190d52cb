//! HTTP fetch of remote-job listings.
//!
//! Issues a single bounded-timeout GET to the listings endpoint and converts
//! the JSON body into a [`JobTable`] holding only the recognised columns.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use scout_core::error::{Result, ScoutError};
use scout_core::models::{JobListing, JobTable};

// ── Wire format ───────────────────────────────────────────────────────────────

/// Top-level shape of the listings endpoint response.
///
/// A missing `jobs` field is treated the same as an empty sequence; both
/// surface as [`ScoutError::NoData`] to the caller.
#[derive(Debug, Deserialize)]
struct ListingsResponse {
    #[serde(default)]
    jobs: Vec<JobListing>,
}

/// Convert a raw response body into a [`JobTable`].
///
/// Each listing keeps exactly the six recognised fields; anything else in
/// the source objects is discarded during deserialisation. Fields absent
/// across the whole response produce no column in the output table.
pub fn parse_listings(body: &str) -> Result<JobTable> {
    let response: ListingsResponse = serde_json::from_str(body)?;
    if response.jobs.is_empty() {
        return Err(ScoutError::NoData);
    }
    Ok(JobTable::from_rows(response.jobs))
}

// ── Fetcher ───────────────────────────────────────────────────────────────────

/// Blocking HTTP client for the listings endpoint.
pub struct Fetcher {
    client: reqwest::blocking::Client,
    api_url: String,
    timeout_secs: u64,
}

impl Fetcher {
    /// Build a fetcher with the given endpoint and request timeout.
    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ScoutError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            timeout_secs,
        })
    }

    /// Issue one GET request and parse the body into a [`JobTable`].
    ///
    /// No retry is attempted; a failed request ends the operation and the
    /// caller must explicitly re-invoke. Failures are classified as timeout,
    /// connection failure, or a generic transport error carrying the
    /// underlying message.
    pub fn fetch(&self) -> Result<JobTable> {
        info!("Fetching listings from {}", self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .send()
            .map_err(|e| self.classify(e))?;

        let response = response
            .error_for_status()
            .map_err(|e| ScoutError::Transport(e.to_string()))?;

        let body = response.text().map_err(|e| self.classify(e))?;
        let table = parse_listings(&body)?;

        debug!(
            "Fetched {} listings across {} columns",
            table.len(),
            table.columns().len()
        );
        Ok(table)
    }

    /// Map a transport error onto the user-facing failure taxonomy.
    fn classify(&self, err: reqwest::Error) -> ScoutError {
        if err.is_timeout() {
            ScoutError::Timeout(self.timeout_secs)
        } else if err.is_connect() {
            ScoutError::Connection(err.to_string())
        } else {
            ScoutError::Transport(err.to_string())
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! This module covers the `name/{query}` endpoint and returns results as
//! tidy [`models::Country`](crate::models::Country) rows. Only the fields
//! the widget renders are requested (`name,capital,population,flags,languages`).
//!
//! ### Notes
//! - The query is percent-encoded as a single path segment; `/` and friends
//!   never escape into the route.
//! - A non-2xx response surfaces as [`LookupError::Http`] whose `Display`
//!   is the bare numeric status code (`"404"`). Callers key the "no such
//!   country" branch off that.
//! - No retries and no request cancellation. One lookup, one request.
//!
//! Typical usage:
//! ```no_run
//! # use country_lookup::Client;
//! let client = Client::default();
//! let countries = client.fetch_countries("poland")?;
//! # Ok::<(), country_lookup::LookupError>(())
//! ```

use crate::models::{ApiCountry, Country};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of a single lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The endpoint answered with a non-success status code.
    #[error("{0}")]
    Http(u16),
    /// Network-level failure (DNS, connection refused, timeout), surfaced
    /// with the transport's own message.
    #[error("{0}")]
    Transport(String),
    /// The response body was not the expected JSON array of countries.
    #[error("decode response: {0}")]
    Decode(String),
}

impl LookupError {
    /// True for the HTTP 404 case, which the API uses for "no match".
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Http(404))
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://restcountries.com/v3.1".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped; everything else non-alphanumeric (including '/')
// is escaped so the query stays one path segment.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Field filter sent with every request; the widget renders nothing else.
const FIELDS: &str = "name,capital,population,flags,languages";

impl Client {
    /// Build the lookup URL for `query` (trimmed, percent-encoded).
    pub fn lookup_url(&self, query: &str) -> String {
        let segment = percent_encoding::utf8_percent_encode(query.trim(), SAFE);
        format!("{}/name/{}?fields={}", self.base_url, segment, FIELDS)
    }

    /// Look up countries whose name matches `query`.
    ///
    /// `query` must be trimmed and non-empty; empty input is the caller's
    /// job to short-circuit before it reaches the network.
    ///
    /// ### Errors
    /// - [`LookupError::Http`] for any non-2xx status (404 = no match)
    /// - [`LookupError::Transport`] for network failures
    /// - [`LookupError::Decode`] for malformed response bodies
    pub fn fetch_countries(&self, query: &str) -> Result<Vec<Country>, LookupError> {
        debug_assert!(
            !query.trim().is_empty(),
            "caller must drop empty input before fetching"
        );

        let url = self.lookup_url(query);
        log::debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Http(status.as_u16()));
        }

        let raw: Vec<ApiCountry> = resp
            .json()
            .map_err(|e| LookupError::Decode(e.to_string()))?;
        Ok(raw.into_iter().map(Country::from).collect())
    }
}

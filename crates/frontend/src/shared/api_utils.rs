//! URL construction and JSON fetching for TheMealDB.
//!
//! All four endpoints are plain GETs against a fixed base with at most one
//! query parameter.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Categories,
    Search(&'a str),
    FilterByCategory(&'a str),
    Lookup(&'a str),
}

impl Endpoint<'_> {
    /// Full URL under `base` (no trailing slash expected)
    pub fn url(&self, base: &str) -> String {
        match self {
            Endpoint::Categories => format!("{}/categories.php", base),
            Endpoint::Search(name) => {
                format!("{}/search.php?s={}", base, urlencoding::encode(name))
            }
            Endpoint::FilterByCategory(category) => {
                format!("{}/filter.php?c={}", base, urlencoding::encode(category))
            }
            Endpoint::Lookup(id) => format!("{}/lookup.php?i={}", base, urlencoding::encode(id)),
        }
    }
}

/// GET `url` and decode the body as `T`
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

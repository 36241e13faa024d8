// src/fetch.rs
// =============================================================================
// This module fetches a single web page over HTTP.
//
// Responsibilities:
// - Make one GET request for the requested URL
// - Treat any status other than 200 OK as an error (no parsing in that case)
// - Report the FINAL URL after redirects, which becomes the base for
//   resolving relative links on the page
// - Download the response body as text
//
// There are no retries, no caching and no rate limiting here; one call
// means one request. The response body is owned by the reqwest::Response
// and is released when it is dropped, on every path.
//
// Rust concepts:
// - async/await: The request suspends instead of blocking a thread
// - map_err: Converting a dependency's error into our own error type
// - RAII: Resource cleanup tied to a value going out of scope
// =============================================================================

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::ExtractError;

// A successfully fetched page, ready for link extraction
#[derive(Debug)]
pub(crate) struct Page {
    /// Final resolved request URL, after any redirects the client followed.
    /// Relative hrefs on the page resolve against this, not against the URL
    /// originally asked for.
    pub base_url: Url,
    /// The response body as text.
    pub body: String,
}

// Fetches the page at `url`.
//
// Error mapping follows the two phases of the pipeline:
// - request failures and non-200 statuses become ExtractError::Fetch
// - body read/decode failures become ExtractError::Parse, because they
//   surface while the document is being consumed, not while it is requested
pub(crate) async fn fetch_page(url: &str) -> Result<Page, ExtractError> {
    // A fresh client per call: this library makes exactly one request,
    // so there is no connection pool worth keeping around
    let client = Client::builder()
        .timeout(Duration::from_secs(10)) // 10 second timeout per request
        .build()
        .map_err(|e| ExtractError::fetch(url, e))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ExtractError::fetch(url, e))?;

    // Exactly 200, not "any 2xx": the contract is strict about this
    if response.status() != StatusCode::OK {
        // StatusCode's Display is the status text, e.g. "404 Not Found"
        return Err(ExtractError::fetch(url, response.status()));
    }

    let base_url = response.url().clone();
    debug!(%base_url, status = %response.status(), "fetched page");

    // Reading the body consumes the response; if the connection dies or the
    // body can't be decoded, the document never existed as far as the
    // parser is concerned
    let body = response
        .text()
        .await
        .map_err(|e| ExtractError::parse(url, e))?;

    Ok(Page {
        base_url,
        body,
    })
}

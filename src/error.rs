// src/error.rs
// =============================================================================
// This module defines the error type the library returns.
//
// Two failure categories, matching the two phases of the pipeline:
// - Fetch: the request itself failed, or the server answered with a status
//   other than 200 OK
// - Parse: the response body could not be read as an HTML document
//
// Both carry the requested URL so callers can tell WHICH page failed when
// they drive many extractions. Per-link problems (an href that won't resolve
// to a URL) are never errors; those candidates are silently dropped.
//
// We use thiserror's derive to get Display and std::error::Error for free;
// the #[error("...")] strings are the stable message formats.
// =============================================================================

use thiserror::Error;

/// Error returned by [`extract`](crate::extract()): the page could not be
/// fetched or could not be parsed. No partial link list accompanies an error.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The HTTP request failed, or the response status was not 200 OK.
    #[error("getting {url}: {detail}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// Status text ("404 Not Found") or the network-level failure.
        detail: String,
    },

    /// The response body could not be consumed as an HTML document.
    #[error("parsing {url} as HTML: {detail}")]
    Parse {
        /// The URL that was requested.
        url: String,
        /// What the parser (or body read) reported.
        detail: String,
    },
}

impl ExtractError {
    pub(crate) fn fetch(url: &str, detail: impl std::fmt::Display) -> Self {
        ExtractError::Fetch {
            url: url.to_string(),
            detail: detail.to_string(),
        }
    }

    pub(crate) fn parse(url: &str, detail: impl std::fmt::Display) -> Self {
        ExtractError::Parse {
            url: url.to_string(),
            detail: detail.to_string(),
        }
    }
}

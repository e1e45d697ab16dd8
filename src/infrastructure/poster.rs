// SPDX-License-Identifier: MPL-2.0
//! Remote poster download.
//!
//! Posters are small still images, so the whole body is read into memory and
//! handed to the image widget as bytes.

use std::time::Duration;

/// Upper bound for a single poster request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Errors that can occur while fetching a poster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PosterError {
    /// The request could not be built, sent or read.
    #[error("poster request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("poster request returned HTTP {0}")]
    Status(u16),

    /// The server answered with an empty body.
    #[error("poster response was empty")]
    Empty,
}

/// Downloads the poster at `url`.
///
/// # Errors
///
/// Returns a [`PosterError`] if the host is unreachable, answers with a
/// non-success status or sends no bytes.
pub async fn fetch_poster(url: String) -> Result<Vec<u8>, PosterError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("OutcomeShowcase/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| PosterError::Request(e.to_string()))?;
    fetch_with(&client, url).await
}

async fn fetch_with(client: &reqwest::Client, url: String) -> Result<Vec<u8>, PosterError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| PosterError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(PosterError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| PosterError::Request(e.to_string()))?;
    if bytes.is_empty() {
        return Err(PosterError::Empty);
    }

    tracing::debug!(%url, size = bytes.len(), "poster downloaded");
    Ok(bytes.to_vec())
}

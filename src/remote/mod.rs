//! Remote content clients.
//!
//! Two remote origins feed the search overlay: the public GitHub repo
//! listing and the hosted content database (photos, videos, writings)
//! reached over its REST surface. Both are read-only and unauthenticated
//! apart from the content API's anon key. Failures never reach the user;
//! callers log them and leave the source's snapshot empty.

mod content;
mod github;

pub use content::{ContentApiClient, PhotoRow, VideoRow, WritingRow};
pub use github::{GithubClient, Repo};

use thiserror::Error;

/// Errors from a remote fetch. All of these are contained at the fetch
/// call site (logged, slot marked failed) and degrade to fewer results.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{service}: request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{service}: unexpected response shape: {detail}")]
    Decode {
        service: &'static str,
        detail: String,
    },
}

/// Read a response body for error reporting, truncated so a misbehaving
/// service cannot flood the logs.
pub(crate) async fn error_body(resp: reqwest::Response) -> String {
    const MAX: usize = 512;
    let mut body = resp.text().await.unwrap_or_default();
    if body.len() > MAX {
        body.truncate(MAX);
        body.push('…');
    }
    body
}

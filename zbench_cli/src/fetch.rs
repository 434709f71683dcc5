use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{info, warn};
use zbench_core::{FetchError, Payload};

/// Payload source used when `--url` is not given.
pub const DEFAULT_URL: &str = "https://api.github.com/users/vicanso/repos";

// api.github.com rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("zbench/", env!("CARGO_PKG_VERSION"));

/// Download `url` with a single blocking GET and keep the whole body.
///
/// No retries and no timeout. A non-success status still yields its body as
/// the payload; only transport failures and an empty body are errors.
pub fn fetch_payload(url: &str) -> Result<Payload, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e.into(),
        })?;

    let response = client.get(url).send().map_err(|e| FetchError::Request {
        url: url.to_string(),
        source: e.into(),
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, %status, "non-success status, benchmarking the body anyway");
    }

    let body = response.bytes().map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e.into(),
    })?;
    if body.is_empty() {
        return Err(FetchError::EmptyBody {
            url: url.to_string(),
        });
    }

    info!(url, %status, bytes = body.len(), "payload fetched");
    Ok(Payload::new(body.to_vec()))
}

//! Single-shot HTTP GET into memory.
//!
//! Uses the curl crate (libcurl): one Easy handle per request, redirects
//! followed, body accumulated in a byte buffer. License archives are small
//! enough that whole-body buffering is acceptable.
//!
//! Runs in the current thread; call from `spawn_blocking` when used from
//! async code.

use crate::config::BldConfig;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single download. The two variants are reported differently
/// by the pipeline: a non-200 status gets its own "failed to download"
/// message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl-level failure: DNS, connect, TLS, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// Response completed with a status other than 200.
    #[error("HTTP status {0}")]
    Status(u32),
}

/// Per-request knobs, derived from config.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Optional User-Agent header; libcurl's default when unset.
    pub user_agent: Option<String>,
}

impl FetchOptions {
    pub fn from_config(cfg: &BldConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&BldConfig::default())
    }
}

/// Performs a GET and returns the full response body.
///
/// Follows redirects; the status of the final response must be exactly 200,
/// otherwise the (possibly partial) body is discarded and
/// [`FetchError::Status`] is returned. No retries.
pub fn download_to_memory(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;
    if let Some(agent) = opts.user_agent.as_deref() {
        easy.useragent(agent)?;
    }

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        tracing::debug!(url, code, "download rejected on status");
        return Err(FetchError::Status(code));
    }
    tracing::debug!(url, bytes = body.len(), "download complete");
    Ok(body)
}

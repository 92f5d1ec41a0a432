pub mod diff;
pub mod types;

pub use types::{FileDiff, PrUrl};

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Error)]
pub enum PrError {
    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid PR URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch PR diff from GitHub: {status}, {body}")]
    FetchFailed { status: u16, body: String },
}

/// Parse a GitHub PR URL into its component parts.
///
/// Expected format: https://github.com/{owner}/{repo}/pull/{number}
/// A trailing slash is tolerated. Returns PrError::InvalidUrl for
/// anything else, before any network call is made.
pub fn parse_pr_url(url: &str) -> Result<PrUrl, PrError> {
    let parsed = reqwest::Url::parse(url.trim_end_matches('/'))
        .map_err(|_| PrError::InvalidUrl(url.to_string()))?;

    if parsed.host_str() != Some("github.com") {
        return Err(PrError::InvalidUrl(url.to_string()));
    }

    let segments: Vec<_> = parsed
        .path_segments()
        .ok_or_else(|| PrError::InvalidUrl(url.to_string()))?
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() != 4 || segments[2] != "pull" {
        return Err(PrError::InvalidUrl(url.to_string()));
    }

    let pr_number = segments[3]
        .parse::<u64>()
        .map_err(|_| PrError::InvalidUrl(url.to_string()))?;

    Ok(PrUrl {
        owner: segments[0].to_string(),
        repo: segments[1].to_string(),
        pr_number,
    })
}

/// Fetch the raw unified diff for a pull request.
///
/// GETs https://github.com/{owner}/{repo}/pull/{number}.diff, which needs
/// no authentication for public repositories, and returns the body verbatim.
/// A non-success status becomes PrError::FetchFailed carrying the status
/// code and response body. One retry on a 5xx or connection error, then
/// give up.
pub async fn fetch_diff(pr_url: &PrUrl) -> Result<String, PrError> {
    fetch_diff_from(pr_url, "https://github.com").await
}

/// Same as fetch_diff, against an arbitrary host.
#[instrument(skip(base_url), fields(owner = %pr_url.owner, repo = %pr_url.repo, pr = pr_url.pr_number))]
async fn fetch_diff_from(pr_url: &PrUrl, base_url: &str) -> Result<String, PrError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let diff_url = format!(
        "{}/{}/{}/pull/{}.diff",
        base_url.trim_end_matches('/'),
        pr_url.owner,
        pr_url.repo,
        pr_url.pr_number
    );

    let mut attempt = 0;
    loop {
        attempt += 1;
        debug!(url = %diff_url, attempt, "fetching PR diff");

        let response = match client
            .get(&diff_url)
            .header("User-Agent", "pr-critic")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) if (err.is_connect() || err.is_timeout()) && attempt == 1 => {
                warn!(error = %err, "diff fetch failed, retrying once");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            debug!(diff_bytes = body.len(), "received PR diff");
            return Ok(body);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() && attempt == 1 {
            warn!(status = status.as_u16(), "diff fetch returned a server error, retrying once");
            continue;
        }

        return Err(PrError::FetchFailed {
            status: status.as_u16(),
            body,
        });
    }
}

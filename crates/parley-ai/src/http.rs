//! HTTP plumbing shared by the OpenAI-compatible clients.

use std::time::Duration;

use crate::AiError;

/// Build a `reqwest` client with the given connect and total timeouts.
pub(crate) fn build_client(connect: Duration, total: Duration) -> Result<reqwest::Client, AiError> {
    reqwest::Client::builder()
        .connect_timeout(connect)
        .timeout(total)
        .build()
        .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))
}

/// Classify a transport error.
pub(crate) fn send_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Turn a non-success response into the matching `AiError`.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}

pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> AiError {
    let body = body.chars().take(200).collect::<String>();
    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            AiError::Authentication(format!("HTTP {status}: {body}"))
        }
        reqwest::StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        _ => AiError::ApiError(format!("HTTP {status}: {body}")),
    }
}

/// Join a base URL and an endpoint path without doubling the slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

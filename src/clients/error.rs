use serde::Serialize;
use thiserror::Error;

/// Why an upstream generation call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    RateLimited,
    ServiceUnavailable,
    InvalidCredentials,
    PermissionDenied,
    Timeout,
    Unknown,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::RateLimited => "rate_limited",
            FailureReason::ServiceUnavailable => "service_unavailable",
            FailureReason::InvalidCredentials => "invalid_credentials",
            FailureReason::PermissionDenied => "permission_denied",
            FailureReason::Timeout => "timeout",
            FailureReason::Unknown => "unknown",
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FailureReason::RateLimited | FailureReason::ServiceUnavailable
        )
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("API key is not configured")]
    NotConfigured,

    #[error("upstream returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("upstream request timed out: {0}")]
    Timeout(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned an empty response")]
    EmptyResponse,

    #[error("could not decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    pub fn reason(&self) -> FailureReason {
        match self {
            UpstreamError::NotConfigured => FailureReason::InvalidCredentials,
            UpstreamError::Http { status, message } => classify_failure(Some(*status), message),
            UpstreamError::Timeout(_) => FailureReason::Timeout,
            UpstreamError::Transport(message) | UpstreamError::Decode(message) => {
                classify_failure(None, message)
            }
            UpstreamError::EmptyResponse => FailureReason::Unknown,
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, UpstreamError::EmptyResponse) || self.reason().is_transient()
    }
}

/// Classifies an upstream failure, status code first and message text second.
pub fn classify_failure(status: Option<u16>, message: &str) -> FailureReason {
    match status {
        Some(429) => return FailureReason::RateLimited,
        Some(503) => return FailureReason::ServiceUnavailable,
        Some(401) => return FailureReason::InvalidCredentials,
        Some(403) => return FailureReason::PermissionDenied,
        Some(408) | Some(504) => return FailureReason::Timeout,
        _ => {}
    }

    let message = message.to_ascii_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

    if contains_any(&["resource_exhausted", "rate limit", "quota", "429"]) {
        FailureReason::RateLimited
    } else if contains_any(&["unavailable", "overloaded", "503"]) {
        FailureReason::ServiceUnavailable
    } else if contains_any(&["api key not valid", "api_key_invalid", "invalid api key", "unauthenticated"]) {
        FailureReason::InvalidCredentials
    } else if contains_any(&["permission_denied", "permission denied"]) {
        FailureReason::PermissionDenied
    } else if contains_any(&["deadline_exceeded", "timed out", "timeout"]) {
        FailureReason::Timeout
    } else {
        FailureReason::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_status_code() {
        assert_eq!(classify_failure(Some(429), ""), FailureReason::RateLimited);
        assert_eq!(classify_failure(Some(503), ""), FailureReason::ServiceUnavailable);
        assert_eq!(classify_failure(Some(401), ""), FailureReason::InvalidCredentials);
        assert_eq!(classify_failure(Some(403), ""), FailureReason::PermissionDenied);
        assert_eq!(classify_failure(Some(504), ""), FailureReason::Timeout);
    }

    #[test]
    fn test_classify_by_message_when_status_is_ambiguous() {
        assert_eq!(
            classify_failure(Some(400), "API key not valid. Please pass a valid API key."),
            FailureReason::InvalidCredentials
        );
        assert_eq!(
            classify_failure(None, "The model is overloaded. Please try again later."),
            FailureReason::ServiceUnavailable
        );
        assert_eq!(
            classify_failure(Some(500), "something odd happened"),
            FailureReason::Unknown
        );
    }

    #[test]
    fn test_transient_split() {
        assert!(UpstreamError::EmptyResponse.is_transient());
        assert!(UpstreamError::Http { status: 429, message: String::new() }.is_transient());
        assert!(UpstreamError::Http { status: 503, message: String::new() }.is_transient());
        assert!(!UpstreamError::Http { status: 403, message: String::new() }.is_transient());
        assert!(!UpstreamError::NotConfigured.is_transient());
        assert!(!UpstreamError::Timeout("deadline".into()).is_transient());
    }

    #[test]
    fn test_failure_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FailureReason::ServiceUnavailable).unwrap();
        assert_eq!(json, "\"service_unavailable\"");
    }
}

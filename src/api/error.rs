//! API error taxonomy.
//!
//! Every failure mode of a backend call maps to one variant here, so the
//! caller can show a distinct, actionable message for connectivity problems,
//! HTTP error statuses, and gateway error pages instead of a raw JSON parse
//! crash.

use thiserror::Error;

/// Errors produced by backend API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout, TLS failure).
    #[error("connection to the AstraVerify backend failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status} - {body_excerpt}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Truncated response body
        body_excerpt: String,
    },

    /// The backend answered 2xx but not with JSON. Typically an API gateway
    /// or load balancer serving an HTML error page.
    #[error("Expected JSON but got {content_type}. Response: {body_excerpt}")]
    ContentType {
        /// The Content-Type header value, or "unknown" if absent
        content_type: String,
        /// Truncated response body
        body_excerpt: String,
    },

    /// The body claimed to be JSON but did not match the expected schema.
    #[error("failed to decode backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// A message suitable for showing directly to the user.
    ///
    /// Connectivity failures get a friendlier phrasing than the underlying
    /// `reqwest` error; everything else already carries the status code or
    /// body excerpt the user needs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => {
                "The AstraVerify backend did not respond in time. Please try again.".to_string()
            }
            ApiError::Network(_) => {
                "Could not reach the AstraVerify backend. Check your network connection and try again."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Truncates a response body for inclusion in an error message, respecting
/// character boundaries.
pub(crate) fn excerpt(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        body.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_contains_status() {
        let err = ApiError::Http {
            status: 404,
            body_excerpt: "Domain parameter is required".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Domain parameter is required"));
    }

    #[test]
    fn test_content_type_error_message() {
        let err = ApiError::ContentType {
            content_type: "text/html".into(),
            body_excerpt: "<html>502 Bad Gateway</html>".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Expected JSON"));
        assert!(msg.contains("text/html"));
    }

    #[test]
    fn test_excerpt_truncation() {
        assert_eq!(excerpt("short", 100), "short");
        let long = "x".repeat(250);
        assert_eq!(excerpt(&long, 100).len(), 100);
        // Multi-byte characters must not be split.
        let emoji = "🚨".repeat(50);
        assert_eq!(excerpt(&emoji, 10).chars().count(), 10);
    }
}

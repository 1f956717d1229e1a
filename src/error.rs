use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by the route service.
///
/// The client never validates airport codes itself. A code the service does
/// not know comes back as [`RemoteError::Status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("route service returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("malformed route response: {0}")]
    MalformedBody(String),
}

/// Errors from a single route plan request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The request never completed (connect, send, or body read failed).
    #[error("network failure: {0}")]
    Network(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl PlanError {
    /// Text shown to the user in the failure alert.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(reason) => format!("Route service unreachable: {reason}"),
            Self::Remote(RemoteError::Status {
                detail: Some(detail),
                ..
            }) => format!("{detail}. Check codes."),
            Self::Remote(RemoteError::Status { status, .. }) => {
                format!("Airport not found or backend error (HTTP {status}). Check codes.")
            }
            Self::Remote(RemoteError::MalformedBody(_)) => {
                "Route service sent an unreadable plan. Try again.".to_string()
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_detail_uses_service_text() {
        let err = PlanError::Remote(RemoteError::Status {
            status: 404,
            detail: Some("Airport not found".into()),
        });
        assert_eq!(err.user_message(), "Airport not found. Check codes.");
    }

    #[test]
    fn bare_status_mentions_code() {
        let err = PlanError::Remote(RemoteError::Status {
            status: 500,
            detail: None,
        });
        assert!(err.user_message().contains("HTTP 500"));
    }

    #[test]
    fn network_failure_is_distinguished() {
        let err = PlanError::Network("connection refused".into());
        assert!(err.user_message().starts_with("Route service unreachable"));
        assert_eq!(err.to_string(), "network failure: connection refused");
    }
}

use thiserror::Error;

/// Every way a pause/resume run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum CheckPauseError {
    #[error("Missing API token. Set {env_var}=<your-token> in the environment.")]
    MissingCredential { env_var: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unauthorized. Check your API token and account permissions.")]
    Authentication,

    #[error("Endpoint not found. Verify API base URL and version.")]
    EndpointNotFound,

    #[error("API request failed ({status}). {body}")]
    Service { status: u16, body: String },

    #[error("Request to monitoring API failed")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from monitoring API")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("No checks matched the provided patterns. Nothing to do.")]
    NoMatches,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CheckPauseError {
    /// Builds a `Service` error, keeping the diagnostic on a single line.
    pub fn service(status: reqwest::StatusCode, body: &str) -> Self {
        let body = body.split_whitespace().collect::<Vec<_>>().join(" ");
        let body = if body.is_empty() {
            status.canonical_reason().unwrap_or("Unknown status").to_string()
        } else {
            body
        };
        Self::Service {
            status: status.as_u16(),
            body,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_service_error_collapses_body_to_one_line() {
        let err = CheckPauseError::service(
            StatusCode::INTERNAL_SERVER_ERROR,
            "  upstream\n  exploded\n\n",
        );
        let msg = err.to_string();
        assert_eq!(msg, "API request failed (500). upstream exploded");
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn test_service_error_empty_body_uses_reason() {
        let err = CheckPauseError::service(StatusCode::BAD_GATEWAY, "   ");
        assert_eq!(err.to_string(), "API request failed (502). Bad Gateway");
    }

    #[test]
    fn test_chained_diagnostic_names_cause_once() {
        let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let detail = cause.to_string();
        let err = anyhow::Error::from(CheckPauseError::from(cause));

        let msg = format!("{:#}", err);
        assert_eq!(msg, format!("Unexpected response from monitoring API: {}", detail));
        assert_eq!(msg.matches(detail.as_str()).count(), 1);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckPauseError::InvalidArgument("x".into()).exit_code(), 2);
        assert_eq!(CheckPauseError::NoMatches.exit_code(), 1);
        assert_eq!(CheckPauseError::Authentication.exit_code(), 1);
        let missing = CheckPauseError::MissingCredential {
            env_var: "PINGDOM_API_TOKEN".into(),
        };
        assert_eq!(missing.exit_code(), 1);
        assert!(missing.to_string().contains("PINGDOM_API_TOKEN"));
    }
}

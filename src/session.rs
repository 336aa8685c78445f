use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Response, StatusCode};

use crate::error::CheckPauseError;
use crate::types::ApiConfig;

/// Which call a response belongs to; only the write maps 404 on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    BulkUpdate,
}

/// Authenticated HTTP session, built once per run. Headers are fixed at creation.
pub struct ApiSession {
    client: reqwest::Client,
    base_url: String,
}

impl ApiSession {
    pub fn new(config: &ApiConfig, token: &str) -> Result<Self, CheckPauseError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| CheckPauseError::Config("API token is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| CheckPauseError::Config(format!("build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn checks_url(&self) -> String {
        format!("{}/checks", self.base_url)
    }
}

/// Turns a non-success response into the matching error kind.
pub async fn ensure_success(res: Response, op: Operation) -> Result<Response, CheckPauseError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    match (status, op) {
        (StatusCode::UNAUTHORIZED, _) => Err(CheckPauseError::Authentication),
        (StatusCode::NOT_FOUND, Operation::BulkUpdate) => Err(CheckPauseError::EndpointNotFound),
        _ => {
            let body = res.text().await.unwrap_or_default();
            Err(CheckPauseError::service(status, &body))
        }
    }
}

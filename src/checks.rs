use tracing::{debug, info, warn};

use crate::error::CheckPauseError;
use crate::session::{ensure_success, ApiSession, Operation};
use crate::types::{Check, ChecksResponse};

/// Fetches every check visible to the token in a single `GET /checks`.
///
/// A response without a `checks` key yields an empty list. Pagination is
/// not handled; the service is expected to return the full set at once.
pub async fn fetch_all(session: &ApiSession) -> Result<Vec<Check>, CheckPauseError> {
    let url = session.checks_url();
    debug!("GET {}", url);

    let res = session.client().get(&url).send().await?;
    let res = ensure_success(res, Operation::Fetch).await?;
    let body = res.text().await?;

    let parsed = parse_checks(&body)?;
    info!(count = parsed.len(), "fetched checks");
    Ok(parsed)
}

pub fn parse_checks(body: &str) -> Result<Vec<Check>, CheckPauseError> {
    let resp: ChecksResponse = serde_json::from_str(body)?;
    let total = resp.checks.len();
    let checks = resp.into_checks();
    if checks.len() < total {
        warn!("skipping {} checks without an id", total - checks.len());
    }
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checks_preserves_order() {
        let checks = parse_checks(
            r#"{"checks":[{"id":2,"name":"web-staging"},{"id":1,"name":"api-prod"}]}"#,
        )
        .unwrap();
        let ids: Vec<u64> = checks.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_parse_checks_missing_key() {
        assert!(parse_checks("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_checks_skips_entries_without_id() {
        let checks = parse_checks(
            r#"{"checks":[{"id":1,"name":"api-prod"},{"name":"api-legacy"},{"id":3,"name":"API-internal"}]}"#,
        )
        .unwrap();
        let ids: Vec<u64> = checks.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_parse_checks_rejects_non_json() {
        let result = parse_checks("<html>maintenance</html>");
        assert!(matches!(result, Err(CheckPauseError::MalformedResponse(_))));
    }
}

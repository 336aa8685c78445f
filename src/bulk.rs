use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::CheckPauseError;
use crate::session::{ensure_success, ApiSession, Operation};

/// Comma-joined decimal ids, in the given order, duplicates kept.
pub fn encode_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Form fields for the bulk write. `checkids` is left out when there are no ids.
pub fn form_fields(ids: &[u64], desired_paused: bool) -> Vec<(&'static str, String)> {
    let mut fields = vec![("paused", desired_paused.to_string())];
    if !ids.is_empty() {
        fields.push(("checkids", encode_ids(ids)));
    }
    fields
}

/// Sets the paused state of all `target_ids` with one `PUT /checks`.
///
/// The batch is treated as all-or-nothing: per-id results in the response
/// are not inspected. Returns the decoded JSON body, or an empty object when
/// the service answers with something other than JSON.
pub async fn apply_bulk(
    session: &ApiSession,
    target_ids: &[u64],
    desired_paused: bool,
) -> Result<Value, CheckPauseError> {
    if target_ids.is_empty() {
        return Err(CheckPauseError::InvalidArgument(
            "bulk update requires at least one check id".to_string(),
        ));
    }

    let url = session.checks_url();
    let fields = form_fields(target_ids, desired_paused);
    debug!("PUT {} paused={} checkids={}", url, desired_paused, encode_ids(target_ids));

    let res = session.client().put(&url).form(&fields).send().await?;
    let res = ensure_success(res, Operation::BulkUpdate).await?;

    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    let body = res.text().await?;

    info!(count = target_ids.len(), paused = desired_paused, "bulk update accepted");

    if is_json && !body.trim().is_empty() {
        Ok(serde_json::from_str(&body)?)
    } else {
        Ok(Value::Object(Map::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ids_keeps_order_and_duplicates() {
        assert_eq!(encode_ids(&[1, 3]), "1,3");
        assert_eq!(encode_ids(&[30, 2, 30]), "30,2,30");
        assert_eq!(encode_ids(&[42]), "42");
        assert_eq!(encode_ids(&[]), "");
    }

    #[test]
    fn test_form_fields() {
        assert_eq!(
            form_fields(&[1, 3], false),
            vec![("paused", "false".to_string()), ("checkids", "1,3".to_string())]
        );
        assert_eq!(form_fields(&[], true), vec![("paused", "true".to_string())]);
    }
}

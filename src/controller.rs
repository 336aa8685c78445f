use tracing::info;

use crate::bulk::apply_bulk;
use crate::checks::fetch_all;
use crate::config::{resolve_token, EnvironmentProvider};
use crate::error::CheckPauseError;
use crate::matcher::filter;
use crate::report::Outcome;
use crate::session::ApiSession;
use crate::types::{ApiConfig, BulkRequest, Invocation};

/// Runs one pause/resume invocation end to end.
///
/// Patterns and the token are validated before any request is made. The
/// first error ends the run; nothing is retried or rolled back.
pub async fn run<E: EnvironmentProvider>(
    invocation: &Invocation,
    config: &ApiConfig,
    env: &E,
) -> Result<Outcome, CheckPauseError> {
    invocation.spec.validate()?;
    let token = resolve_token(env, &invocation.token_env)?;
    let session = ApiSession::new(config, &token)?;

    let checks = fetch_all(&session).await?;
    let matched = filter(&checks, &invocation.spec)?;
    if matched.is_empty() {
        return Err(CheckPauseError::NoMatches);
    }
    info!("{} of {} checks matched", matched.len(), checks.len());

    let request = BulkRequest::from_matches(&matched, invocation.action, invocation.dry_run);
    if request.dry_run {
        info!("dry run, skipping bulk update");
        return Ok(Outcome::Previewed {
            action: invocation.action,
            checks: matched,
        });
    }

    apply_bulk(&session, &request.target_ids, request.desired_paused).await?;

    Ok(Outcome::Applied {
        action: invocation.action,
        checks: matched,
    })
}

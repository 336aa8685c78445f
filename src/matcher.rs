use crate::error::CheckPauseError;
use crate::types::{Check, MatchSpec};

impl MatchSpec {
    pub fn new<I, S>(patterns: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            case_sensitive,
        }
    }

    pub fn validate(&self) -> Result<(), CheckPauseError> {
        if self.patterns.is_empty() {
            return Err(CheckPauseError::InvalidArgument(
                "No patterns provided. Pass one or more strings to match (e.g., `pause api checkout`)."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Keeps the checks whose name contains at least one pattern.
///
/// Input order is preserved and nothing is deduplicated. Unless
/// `case_sensitive` is set both sides are lowercased before comparing.
pub fn filter(checks: &[Check], spec: &MatchSpec) -> Result<Vec<Check>, CheckPauseError> {
    spec.validate()?;

    let patterns: Vec<String> = if spec.case_sensitive {
        spec.patterns.clone()
    } else {
        spec.patterns.iter().map(|p| p.to_lowercase()).collect()
    };

    let matched = checks
        .iter()
        .filter(|check| {
            if spec.case_sensitive {
                let name = check.match_name();
                patterns.iter().any(|p| name.contains(p.as_str()))
            } else {
                let name = check.match_name().to_lowercase();
                patterns.iter().any(|p| name.contains(p.as_str()))
            }
        })
        .cloned()
        .collect();

    Ok(matched)
}

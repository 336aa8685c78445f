use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.pingdom.com/api/3.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_TOKEN_ENV: &str = "PINGDOM_API_TOKEN";

/// Endpoint settings shared by every call in a run.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// A monitoring check as returned by `GET /checks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub id: u64,
    pub name: Option<String>,
}

impl Check {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Name used for matching; a missing name matches as empty.
    pub fn match_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("id:{}", self.id),
        }
    }
}

/// Raw `checks` entry; the service may omit `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEntry {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChecksResponse {
    #[serde(default)]
    pub checks: Vec<CheckEntry>,
}

impl ChecksResponse {
    /// Entries that carry an id, in response order. The rest cannot be
    /// targeted by a bulk write and are dropped.
    pub fn into_checks(self) -> Vec<Check> {
        self.checks
            .into_iter()
            .filter_map(|entry| entry.id.map(|id| Check { id, name: entry.name }))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
}

impl Action {
    pub fn desired_paused(self) -> bool {
        matches!(self, Action::Pause)
    }

    /// Verb shown in a dry-run preview.
    pub fn preview_verb(self) -> &'static str {
        match self {
            Action::Pause => "PAUSE",
            Action::Resume => "RESUME",
        }
    }

    /// Verb shown after the write succeeded.
    pub fn applied_verb(self) -> &'static str {
        match self {
            Action::Pause => "Paused",
            Action::Resume => "Resumed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSpec {
    pub patterns: Vec<String>,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRequest {
    pub target_ids: Vec<u64>,
    pub desired_paused: bool,
    pub dry_run: bool,
}

impl BulkRequest {
    pub fn from_matches(matched: &[Check], action: Action, dry_run: bool) -> Self {
        Self {
            target_ids: matched.iter().map(|c| c.id).collect(),
            desired_paused: action.desired_paused(),
            dry_run,
        }
    }
}

/// One parsed command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub action: Action,
    pub spec: MatchSpec,
    pub token_env: String,
    pub dry_run: bool,
}

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::CheckPauseError;
use crate::types::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<ApiConfig> {
    load_config_with_env(&SystemEnvironment)
}

pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<ApiConfig> {
    let base_url = env
        .get_var("PINGDOM_API_URL")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout_secs: u64 = env
        .get_var("PINGDOM_TIMEOUT_SECS")
        .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
        .trim()
        .parse()
        .context("Invalid PINGDOM_TIMEOUT_SECS")?;
    if timeout_secs == 0 {
        return Err(anyhow!("PINGDOM_TIMEOUT_SECS must be greater than zero"));
    }

    Ok(ApiConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Reads the bearer token from the variable named `env_var`.
pub fn resolve_token<E: EnvironmentProvider>(
    env: &E,
    env_var: &str,
) -> std::result::Result<String, CheckPauseError> {
    env.get_var(env_var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CheckPauseError::MissingCredential {
            env_var: env_var.to_string(),
        })
}

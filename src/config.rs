//! File and environment configuration for CORS policies.
//!
//! A TOML file carries a `[cors]` base table plus optional `[[resources]]`
//! entries that override individual fields for a path pattern:
//!
//! ```toml
//! [cors]
//! allowed_origins = ["http://localhost:5173", "http://localhost:3000"]
//! max_age_seconds = 86400
//!
//! [[resources]]
//! path = "/optimizer/api/.*"
//! allowed_methods = ["GET", "POST", "OPTIONS"]
//! ```

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, DEFAULT_PREFLIGHT_STATUS};
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowedOrigins;
use crate::policy::CorsPolicy;
use crate::resources::{CorsResources, PatternError};
use crate::util::split_list;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
const ENV_ALLOW_ALL_ORIGINS: &str = "CORS_ALLOW_ALL_ORIGINS";
const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
const ENV_EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
const ENV_MAX_AGE: &str = "CORS_MAX_AGE";
const ENV_PREFLIGHT_STATUS: &str = "CORS_PREFLIGHT_STATUS";

/// Pattern used for the base policy when a file declares no resources.
pub const CATCH_ALL_PATTERN: &str = ".*";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CORS configuration from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CORS configuration")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: String, value: String },
    #[error("invalid CORS policy")]
    Validation(#[from] ValidationError),
    #[error("invalid CORS resource")]
    Pattern(#[from] PatternError),
}

/// Serializable mirror of [`CorsOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Origins allowed to read responses. `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Shortcut for a development setup that allows every origin.
    pub allow_all_origins: bool,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
    pub preflight_status: u16,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let options = CorsOptions::default();
        Self {
            allowed_origins: Vec::new(),
            allow_all_origins: false,
            allowed_methods: options.methods.iter().cloned().collect(),
            allowed_headers: options.allowed_headers.iter().cloned().collect(),
            exposed_headers: Vec::new(),
            allow_credentials: false,
            max_age_seconds: DEFAULT_MAX_AGE_SECS,
            preflight_status: DEFAULT_PREFLIGHT_STATUS,
        }
    }
}

impl CorsConfig {
    /// Loads the configuration from `CORS_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, starting from
    /// the defaults and overriding every key that is present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ALLOWED_ORIGINS) {
            config.allowed_origins = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_ALL_ORIGINS) {
            config.allow_all_origins = parse_bool(ENV_ALLOW_ALL_ORIGINS, &value)?;
        }
        if let Some(value) = lookup(ENV_ALLOWED_METHODS) {
            config.allowed_methods = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_HEADERS) {
            config.allowed_headers = split_list(&value);
        }
        if let Some(value) = lookup(ENV_EXPOSED_HEADERS) {
            config.exposed_headers = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_CREDENTIALS) {
            config.allow_credentials = parse_bool(ENV_ALLOW_CREDENTIALS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_AGE) {
            config.max_age_seconds = parse_number(ENV_MAX_AGE, &value)?;
        }
        if let Some(value) = lookup(ENV_PREFLIGHT_STATUS) {
            config.preflight_status = parse_number(ENV_PREFLIGHT_STATUS, &value)?;
        }

        Ok(config)
    }

    pub fn to_options(&self) -> CorsOptions {
        let origins = if self.allow_all_origins {
            AllowedOrigins::any()
        } else {
            AllowedOrigins::list(self.allowed_origins.iter().cloned())
        };

        CorsOptions {
            origins,
            methods: AllowedMethods::list(self.allowed_methods.iter().cloned()),
            allowed_headers: AllowedHeaders::list(self.allowed_headers.iter().cloned()),
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().cloned()),
            credentials: self.allow_credentials,
            max_age: self.max_age_seconds,
            preflight_status: self.preflight_status,
        }
    }

    pub fn build_policy(&self) -> Result<CorsPolicy, ConfigError> {
        Ok(CorsPolicy::new(self.to_options())?)
    }

    fn apply(&self, resource: &ResourceConfig) -> Self {
        let mut merged = self.clone();
        if let Some(value) = &resource.allowed_origins {
            merged.allowed_origins = value.clone();
        }
        if let Some(value) = resource.allow_all_origins {
            merged.allow_all_origins = value;
        }
        if let Some(value) = &resource.allowed_methods {
            merged.allowed_methods = value.clone();
        }
        if let Some(value) = &resource.allowed_headers {
            merged.allowed_headers = value.clone();
        }
        if let Some(value) = &resource.exposed_headers {
            merged.exposed_headers = value.clone();
        }
        if let Some(value) = resource.allow_credentials {
            merged.allow_credentials = value;
        }
        if let Some(value) = resource.max_age_seconds {
            merged.max_age_seconds = value;
        }
        if let Some(value) = resource.preflight_status {
            merged.preflight_status = value;
        }
        merged
    }
}

/// A `[[resources]]` entry. Unset fields inherit from the `[cors]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    /// Path pattern, anchored at the start of the request path.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_all_origins: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposed_headers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preflight_status: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsFileConfig {
    pub cors: CorsConfig,
    pub resources: Vec<ResourceConfig>,
}

impl CorsFileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            resources = config.resources.len(),
            "loaded CORS configuration"
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolved configuration of every resource, per-resource fields applied.
    pub fn resolved(&self) -> Vec<(String, CorsConfig)> {
        if self.resources.is_empty() {
            return vec![(CATCH_ALL_PATTERN.to_string(), self.cors.clone())];
        }

        self.resources
            .iter()
            .map(|resource| (resource.path.clone(), self.cors.apply(resource)))
            .collect()
    }

    pub fn build_resources(&self) -> Result<CorsResources, ConfigError> {
        let mut resources = CorsResources::new();
        for (pattern, config) in self.resolved() {
            resources.add(&pattern, config.build_policy()?)?;
        }
        Ok(resources)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid_value(key, value))
}

fn invalid_value(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

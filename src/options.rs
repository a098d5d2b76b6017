use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, DEFAULT_PREFLIGHT_STATUS, WILDCARD};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds a browser may cache the preflight result.
    pub max_age: u64,
    pub preflight_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::none(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: DEFAULT_MAX_AGE_SECS,
            preflight_status: DEFAULT_PREFLIGHT_STATUS,
        }
    }
}

impl CorsOptions {
    /// Allows the local Vite dev server and the alternative dev server port.
    pub fn development() -> Self {
        Self {
            origins: AllowedOrigins::list(["http://localhost:5173", "http://localhost:3000"]),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.origins.is_wildcard() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let Some(origin) = self.origins.first_invalid() {
            return Err(ValidationError::InvalidOrigin(origin.to_string()));
        }

        if self.methods.is_empty() {
            return Err(ValidationError::EmptyList { field: "methods" });
        }
        if self.methods.iter().any(|value| value == WILDCARD) {
            return Err(ValidationError::WildcardInList { field: "methods" });
        }
        if let Some(method) = self.methods.first_invalid() {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if self.allowed_headers.is_empty() {
            return Err(ValidationError::EmptyList {
                field: "allowed_headers",
            });
        }
        if self.allowed_headers.iter().any(|value| value == WILDCARD) {
            return Err(ValidationError::WildcardInList {
                field: "allowed_headers",
            });
        }
        if let Some(name) = self.allowed_headers.first_invalid() {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        if self.exposed_headers.iter().any(|value| value == WILDCARD) {
            return Err(ValidationError::WildcardInList {
                field: "exposed_headers",
            });
        }
        if let Some(name) = self.exposed_headers.first_invalid() {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        if !(200..=299).contains(&self.preflight_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.preflight_status,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials cannot be combined with the wildcard origin; list the allowed origins explicitly"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("`{0}` is not a serialized origin (expected scheme://host[:port])")]
    InvalidOrigin(String),
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("{field} must list at least one entry")]
    EmptyList { field: &'static str },
    #[error("the wildcard `*` is not supported in {field}")]
    WildcardInList { field: &'static str },
    #[error("preflight status {0} must be in the 2xx range")]
    InvalidPreflightStatus(u16),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use crate::context::RequestContext;
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile resource pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("compiling resource pattern took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("resource pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

#[derive(Clone, Debug)]
struct Resource {
    pattern: String,
    regex: Regex,
    policy: CorsPolicy,
}

/// Policies scoped to request paths.
///
/// Patterns are regular expressions anchored at the start of the path, so
/// `/optimizer/api/.*` covers every endpoint below `/optimizer/api/`. When
/// several patterns match, the longest pattern wins; equal lengths keep
/// registration order.
#[derive(Clone, Debug, Default)]
pub struct CorsResources {
    resources: Vec<Resource>,
}

impl CorsResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pattern: &str, policy: CorsPolicy) -> Result<(), PatternError> {
        let regex = compile_pattern(pattern, PATTERN_COMPILE_BUDGET)?;
        let position = self
            .resources
            .iter()
            .position(|existing| existing.pattern.len() < pattern.len())
            .unwrap_or(self.resources.len());

        tracing::debug!(pattern, position, "registered CORS resource");
        self.resources.insert(
            position,
            Resource {
                pattern: pattern.to_string(),
                regex,
                policy,
            },
        );
        Ok(())
    }

    pub fn with(mut self, pattern: &str, policy: CorsPolicy) -> Result<Self, PatternError> {
        self.add(pattern, policy)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Registered patterns in matching order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|resource| resource.pattern.as_str())
    }

    pub fn policy_for(&self, path: &str) -> Option<&CorsPolicy> {
        self.resources
            .iter()
            .find(|resource| resource.regex.is_match(path))
            .map(|resource| &resource.policy)
    }

    /// Evaluates the request against the first matching resource.
    ///
    /// `None` means no resource covers the path and the request should pass
    /// through without CORS headers.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> Option<CorsDecision> {
        match self.policy_for(request.path) {
            Some(policy) => Some(policy.evaluate(request)),
            None => {
                tracing::trace!(path = request.path, "no CORS resource matches path");
                None
            }
        }
    }
}

fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|err| PatternError::Build {
        pattern: pattern.to_string(),
        source: Box::new(err),
    })?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

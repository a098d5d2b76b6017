use crate::constants::WILDCARD;
use crate::util::dedup_trimmed;
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

const MAX_ORIGIN_LENGTH: usize = 4_096;

// scheme "://" host [":" port], nothing after the authority.
static SERIALIZED_ORIGIN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/?#@\s:]+(:[0-9]{1,5})?$").ok()
});

/// The set of origins that may receive a CORS grant.
///
/// Entries keep their configuration order. A literal `*` entry turns the set
/// into a wildcard instead of being stored, so [`AllowedOrigins::entries`] only
/// ever contains concrete origins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    entries: Vec<String>,
    wildcard: bool,
}

/// Outcome of matching a request origin against [`AllowedOrigins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// The wildcard is configured; respond with `*`.
    Any,
    /// The origin is listed; echo it back verbatim.
    Exact(String),
    /// An origin was sent but it is not allowed.
    Disallow,
    /// The request carried no origin.
    Absent,
}

impl OriginDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, OriginDecision::Any | OriginDecision::Exact(_))
    }
}

impl AllowedOrigins {
    /// A set that grants every origin with `Access-Control-Allow-Origin: *`.
    pub fn any() -> Self {
        Self {
            entries: Vec::new(),
            wildcard: true,
        }
    }

    /// A set that grants no origin at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut wildcard = false;
        let entries = dedup_trimmed(values, false)
            .into_iter()
            .filter(|entry| {
                if entry == WILDCARD {
                    wildcard = true;
                    false
                } else {
                    true
                }
            })
            .collect();

        Self { entries, wildcard }
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        !self.wildcard && self.entries.is_empty()
    }

    /// Exact, case-sensitive membership test against the concrete entries.
    pub fn contains(&self, origin: &str) -> bool {
        self.entries.iter().any(|entry| entry == origin)
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        // `*` does not depend on the request origin at all.
        if self.wildcard {
            return OriginDecision::Any;
        }

        let origin = match request_origin {
            Some(origin) if !origin.is_empty() => origin,
            _ => return OriginDecision::Absent,
        };

        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        if self.contains(origin) {
            OriginDecision::Exact(origin.to_string())
        } else {
            OriginDecision::Disallow
        }
    }

    /// Responses vary by origin unless every origin gets the same `*` grant.
    pub fn varies_by_origin(&self) -> bool {
        !self.wildcard
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| !is_serialized_origin(entry))
            .map(String::as_str)
    }
}

pub(crate) fn is_serialized_origin(value: &str) -> bool {
    value.len() <= MAX_ORIGIN_LENGTH
        && SERIALIZED_ORIGIN
            .as_ref()
            .is_some_and(|regex| regex.is_match(value))
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

use crate::constants::method;
use crate::util::{dedup_trimmed, is_http_token};

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Methods are case-sensitive, so `GET` and `get` are kept as distinct entries.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods, preserving order.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dedup_trimmed(values, false))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(", "))
        }
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|value| !is_http_token(value))
            .map(String::as_str)
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::POST, method::OPTIONS])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;

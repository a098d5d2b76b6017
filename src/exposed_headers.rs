use crate::util::{dedup_trimmed, is_http_token};

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders(Vec<String>);

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, automatically trimming
    /// whitespace and removing duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dedup_trimmed(values, true))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the configuration into a header-ready value.
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

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;

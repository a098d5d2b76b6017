use crate::constants::header;
use crate::util::{dedup_trimmed, is_http_token};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders(Vec<String>);

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::X_REQUESTED_WITH,
        ])
    }
}

impl AllowedHeaders {
    /// Header names compare case-insensitively; the first spelling wins.
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
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;

use crate::constants::method;

/// Borrowed view of the parts of an incoming request the filter inspects.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self {
            method,
            path,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}

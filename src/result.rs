use crate::constants::header;
use crate::headers::Headers;

/// Headers and response metadata produced for a single request.
///
/// When `short_circuit` is set the host must answer immediately with `status`
/// and these headers, without running any downstream handler. Otherwise the
/// headers are merged onto whatever response the handler produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    pub headers: Headers,
    pub short_circuit: bool,
    pub status: Option<u16>,
}

impl CorsDecision {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn allow_origin(&self) -> Option<&str> {
        self.header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    }

    pub fn is_preflight(&self) -> bool {
        self.short_circuit
    }
}

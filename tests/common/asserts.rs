use cors_filter_rs::constants::header;
use cors_filter_rs::{CorsDecision, Headers};

pub fn assert_actual(decision: CorsDecision) -> Headers {
    assert!(
        !decision.short_circuit,
        "expected actual-request decision, got preflight {:?}",
        decision
    );
    assert_eq!(decision.status, None);
    decision.headers
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    assert!(
        decision.short_circuit,
        "expected preflight decision, got {:?}",
        decision
    );
    let status = decision
        .status
        .expect("preflight decisions always carry a status");
    (decision.headers, status)
}

/// Emitted names are canonical, so lookups are exact.
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name).map(String::as_str)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains_key(name)
}

/// `Vary` entries in emission order.
pub fn vary_entries(headers: &Headers) -> Vec<&str> {
    header_value(headers, header::VARY)
        .map(|value| value.split(", ").collect())
        .unwrap_or_default()
}

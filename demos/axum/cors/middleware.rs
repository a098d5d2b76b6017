use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use cors_filter_rs::{
    CorsDecision, Headers, RequestContext,
    constants::{PREFLIGHT_ACK_BODY, header},
};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();
    let origin = header_value(request.headers(), header::ORIGIN);

    let mut context = RequestContext::new(&method, &path);
    if let Some(origin) = origin.as_deref() {
        context = context.with_origin(origin);
    }

    match state.resources.evaluate(&context) {
        Some(decision) if decision.short_circuit => preflight_response(decision),
        Some(decision) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &decision.headers);
            response
        }
        None => next.run(request).await,
    }
}

fn preflight_response(decision: CorsDecision) -> Response {
    let status = decision
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);

    let mut response = Response::new(Body::from(PREFLIGHT_ACK_BODY));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    apply_headers(response.headers_mut(), &decision.headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            // Vary may already be set by the handler.
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

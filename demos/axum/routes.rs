use axum::{
    Json,
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::optimize::optimize_resume;

pub async fn optimize(body: Bytes) -> Response {
    let outcome = optimize_resume(&body);
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome.body)).into_response()
}

use actix_web::{HttpResponse, http::StatusCode, web};

use crate::optimize::optimize_resume;

pub async fn optimize(body: web::Bytes) -> HttpResponse {
    let outcome = optimize_resume(&body);
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(outcome.body)
}

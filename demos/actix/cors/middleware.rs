use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{
    StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use actix_web::{Error, HttpResponse};
use cors_filter_rs::{
    CorsDecision, Headers, RequestContext,
    constants::{PREFLIGHT_ACK_BODY, header},
};

use super::SharedResources;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct CorsFilter {
    resources: SharedResources,
}

impl CorsFilter {
    pub fn new(resources: SharedResources) -> Self {
        Self { resources }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsFilterMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsFilterMiddleware {
            service,
            resources: self.resources.clone(),
        }))
    }
}

pub struct CorsFilterMiddleware<S> {
    service: S,
    resources: SharedResources,
}

impl<S, B> Service<ServiceRequest> for CorsFilterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let decision = {
            let origin = req
                .headers()
                .get(header::ORIGIN)
                .and_then(|value| value.to_str().ok());
            let mut context = RequestContext::new(req.method().as_str(), req.path());
            if let Some(origin) = origin {
                context = context.with_origin(origin);
            }
            self.resources.evaluate(&context)
        };

        match decision {
            Some(decision) if decision.short_circuit => {
                Box::pin(async move { Ok(preflight_response(req, decision)) })
            }
            Some(decision) => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?.map_into_left_body();
                    apply_headers(res.headers_mut(), &decision.headers);
                    Ok(res)
                })
            }
            None => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
        }
    }
}

fn preflight_response<B>(req: ServiceRequest, decision: CorsDecision) -> ServiceResponse<EitherBody<B>> {
    let status = decision
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);

    let mut response = HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, "application/json"))
        .body(PREFLIGHT_ACK_BODY);
    apply_headers(response.headers_mut(), &decision.headers);
    req.into_response(response.map_into_right_body())
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

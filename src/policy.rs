use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsDecision;

/// Immutable CORS policy that turns a request into a [`CorsDecision`].
///
/// Construction validates the [`CorsOptions`] once; evaluation is a pure
/// function of the request and never fails. A policy can be shared freely
/// between threads, typically behind an `Arc`.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        if options.origins.is_wildcard() {
            tracing::warn!("CORS policy allows any origin");
        } else if options.origins.is_empty() {
            tracing::warn!("CORS policy allows no origin; cross-origin reads will be blocked");
        }
        tracing::debug!(
            origins = ?options.origins.entries(),
            credentials = options.credentials,
            max_age = options.max_age,
            "CORS policy created"
        );

        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let preflight = request.is_preflight();
        let mut headers = HeaderCollection::new();

        let (origin_headers, origin) = builder.build_origin_headers(request);
        headers.extend(origin_headers);
        let granted = origin.is_granted();
        if !granted {
            tracing::debug!(
                origin = request.origin.unwrap_or_default(),
                method = request.method,
                path = request.path,
                "origin not allowed; omitting Access-Control-Allow-Origin"
            );
        }

        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());

        if granted {
            headers.extend(builder.build_credentials_header());
            if !preflight {
                headers.extend(builder.build_exposed_headers());
            }
        }

        CorsDecision {
            headers: headers.into_headers(),
            short_circuit: preflight,
            status: preflight.then_some(self.options.preflight_status),
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

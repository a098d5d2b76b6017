use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> (HeaderCollection, OriginDecision) {
        let decision = self.options.origins.resolve(request.origin);
        let mut headers = HeaderCollection::with_estimate(2);

        if self.options.origins.varies_by_origin() {
            headers.add_vary(header::ORIGIN);
        }

        match &decision {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
            }
            OriginDecision::Exact(origin) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.as_str());
            }
            OriginDecision::Disallow | OriginDecision::Absent => {}
        }

        (headers, decision)
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.allowed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.to_string(),
        );
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;

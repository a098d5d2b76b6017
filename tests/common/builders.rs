use cors_filter_rs::constants::method;
use cors_filter_rs::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, CorsDecision, CorsOptions, CorsPolicy,
    CorsResources, ExposedHeaders, RequestContext, ValidationError,
};

pub const OPTIMIZE_PATH: &str = "/optimizer/api/optimize-resume/";

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    preflight_status: Option<u16>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.origins = Some(AllowedOrigins::any());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.preflight_status = Some(status);
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();
        CorsOptions {
            origins: self.origins.unwrap_or(defaults.origins),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            preflight_status: self.preflight_status.unwrap_or(defaults.preflight_status),
        }
    }

    pub fn try_build(self) -> Result<CorsPolicy, ValidationError> {
        CorsPolicy::new(self.options())
    }

    pub fn build(self) -> CorsPolicy {
        self.try_build().expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: OPTIMIZE_PATH.to_string(),
            origin: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
        }
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        policy.evaluate(&self.context())
    }

    pub fn route(self, resources: &CorsResources) -> Option<CorsDecision> {
        resources.evaluate(&self.context())
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder::new(method::POST)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

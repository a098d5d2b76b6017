pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Sentinel accepted in origin lists to allow any origin.
pub const WILDCARD: &str = "*";

/// Preflight responses are cached by browsers for 24 hours unless configured otherwise.
pub const DEFAULT_MAX_AGE_SECS: u64 = 86_400;

pub const DEFAULT_PREFLIGHT_STATUS: u16 = 200;

/// Acknowledgment body hosts may send with a short-circuited preflight.
pub const PREFLIGHT_ACK_BODY: &str = r#"{"status":"ok"}"#;

//! CORS decision filter.
//!
//! A [`CorsPolicy`] is built once from validated [`CorsOptions`] and turns each
//! request into a [`CorsDecision`]: the CORS response headers, and whether the
//! host must answer a preflight immediately instead of running its handler.
//! [`CorsResources`] scopes policies to request paths, and [`config`] loads
//! them from TOML files or `CORS_*` environment variables.

mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod policy;
mod resources;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig, CorsFileConfig, ResourceConfig};
pub use context::RequestContext;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginDecision};
pub use policy::CorsPolicy;
pub use resources::{CorsResources, PatternError};
pub use result::CorsDecision;

use std::sync::Arc;

use cors_filter_rs::{ConfigError, CorsConfig, CorsFileConfig, CorsOptions, CorsResources};

pub const CONFIG_PATH_ENV: &str = "CORS_CONFIG";
pub const API_PATTERN: &str = "/optimizer/api/.*";

pub type SharedResources = Arc<CorsResources>;

/// File configuration when `CORS_CONFIG` is set, `CORS_*` variables otherwise.
pub fn load_resources() -> Result<SharedResources, ConfigError> {
    let resources = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => CorsFileConfig::load(path)?.build_resources()?,
        None => {
            let mut config = CorsConfig::from_env()?;
            if config.allowed_origins.is_empty() && !config.allow_all_origins {
                config.allowed_origins = CorsOptions::development().origins.entries().to_vec();
            }
            CorsResources::new().with(API_PATTERN, config.build_policy()?)?
        }
    };
    Ok(Arc::new(resources))
}

pub mod middleware;

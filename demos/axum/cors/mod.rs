use std::sync::Arc;

use cors_filter_rs::{ConfigError, CorsConfig, CorsFileConfig, CorsOptions, CorsResources};

pub const CONFIG_PATH_ENV: &str = "CORS_CONFIG";
pub const API_PATTERN: &str = "/optimizer/api/.*";

pub type SharedResources = Arc<CorsResources>;

#[derive(Clone)]
pub struct AppState {
    pub resources: SharedResources,
}

pub fn build_state() -> Result<AppState, ConfigError> {
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

    Ok(AppState {
        resources: Arc::new(resources),
    })
}

pub mod middleware;

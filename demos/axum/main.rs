mod cors;
#[path = "../optimize.rs"]
mod optimize;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::post};
use cors::middleware::cors_middleware;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cors_filter_rs=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = cors::build_state()?;

    // Wraps the whole method router so OPTIONS reaches the filter.
    let app = Router::new()
        .route(optimize::OPTIMIZE_ROUTE, post(routes::optimize))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 5001));
    tracing::info!(%addr, "axum demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

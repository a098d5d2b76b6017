mod cors;
#[path = "../optimize.rs"]
mod optimize;
mod routes;

use actix_web::{App, HttpServer, web};
use cors::middleware::CorsFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cors_filter_rs=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let resources = cors::load_resources().map_err(std::io::Error::other)?;
    tracing::info!(patterns = ?resources.patterns().collect::<Vec<_>>(), "actix demo listening on 127.0.0.1:5002");

    HttpServer::new(move || {
        App::new()
            .wrap(CorsFilter::new(resources.clone()))
            .route(optimize::OPTIMIZE_ROUTE, web::post().to(routes::optimize))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}

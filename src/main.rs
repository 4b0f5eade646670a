mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::AppConfig::from_env();

    info!("🔌 Opening database {}...", config.database_path.display());
    let store = db::Store::open(&config.database_path)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("✅ Database ready!");

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let server_addr = config.server_addr();
    info!("🚀 Starting server on http://{}", server_addr);

    let store = web::Data::new(store);
    let app_config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(app_config.clone())
            .configure(routes::configure_routes)
    })
        .bind(server_addr)?
        .run()
        .await
}

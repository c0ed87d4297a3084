//! Entry point: loads configuration, opens the document store and serves the
//! form endpoints with axum.

use std::net::SocketAddr;

use academy_guard::{
    backend::{router::get_router, AppState},
    config::Config,
    database::Database,
};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Invalid configuration")?;
    let db = Database::open(&config.data_path)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let app = get_router(AppState::new(config, db));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}

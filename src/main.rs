use anyhow::Context;
use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

mod controllers;
mod db;
mod error;
mod models;
mod routers;
mod secrets;

use crate::secrets::SECRET_MANAGER;
use db::Database;
use routers::{
    create_song_route, delete_song_route, health_check_route, list_songs_route, root_route,
    update_song_route,
};

fn app(database: Database) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .route("/songs", post(create_song_route).get(list_songs_route))
        .route(
            "/songs/{id}",
            put(update_song_route).delete(delete_song_route),
        )
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(database)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let database_url = SECRET_MANAGER.get("DATABASE_URL");
    let database = Database::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    info!("📊 Connected to PostgreSQL database");

    let port = SECRET_MANAGER.get("PORT");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("🎵 Song API listening on port {}", port);
    axum::serve(listener, app(database)).await?;

    Ok(())
}

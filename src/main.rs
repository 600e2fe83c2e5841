use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, Router},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod models;
mod routes;
mod services;
mod state;
mod utils;

use crate::{
    config::Config,
    services::{AuthService, Database, NotificationService, SurrealNotificationStore, UserService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "wasl_admin=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wasl admin notification service...");

    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    if config.is_development() {
        info!("Running in development mode");
    }

    let db = Arc::new(match Database::new(&config).await {
        Ok(db) => {
            db.verify_connection().await?;
            info!("Database connection established successfully");
            db
        }
        Err(e) => {
            error!("Failed to create database connection: {}", e);
            return Err(anyhow::anyhow!("Database initialization failed"));
        }
    });

    let auth_service = AuthService::new(&config).await?;
    let user_service = UserService::new(db.clone()).await?;
    let notification_store = Arc::new(SurrealNotificationStore::new(db.clone()));
    let notification_service = NotificationService::new(
        Arc::new(user_service.clone()),
        notification_store,
        &config,
    )
    .await?;

    let app_state = Arc::new(AppState {
        auth_service,
        user_service,
        notification_service,
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(
            config
                .cors_allowed_origins
                .split(',')
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        );

    let app = Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .nest("/api/admin/notifications", routes::notifications::router())
        .nest("/api/admin/events", routes::events::router())
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            utils::middleware::auth_middleware,
        ))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server on http://{}", addr);

    axum::Server::bind(&addr.parse()?)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "Wasl admin service is running!"
}

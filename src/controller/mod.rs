use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::Method;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::mailer::Mailer;

pub mod booking_controller;
pub mod health_check;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

pub async fn serve(app_state: AppState, config: &Config) -> anyhow::Result<()> {
    let application = build_application(app_state);

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

/// Routes plus the 404 fallback and a CORS layer open to every origin.
pub fn build_application(app_state: AppState) -> Router {
    router_endpoints(app_state)
        .fallback(page_not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_origin(Any)
                        .allow_headers(Any)
                )
        )
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .nest("/api", booking_controller::router(app_state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return std::future::pending().await;
    }
    info!("Shutdown signal received, draining in-flight requests");
}

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod pages;
pub mod telemetry;

use axum::Router;
use services::AppServices;
use tower_http::trace::TraceLayer;

/// Shared handler state. Holds the injected services only.
#[derive(Clone)]
pub struct AppState {
    pub services: AppServices,
}

/// Build the HTTP router: JSON API under `/api` plus the page shell.
pub fn router(services: AppServices) -> Router {
    Router::new()
        .nest("/api", api::routes())
        .merge(pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { services })
}

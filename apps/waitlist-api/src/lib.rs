//! Waitlist API - backend for the compliance preview site
//!
//! Provides REST endpoints for:
//! - Waitlist signup, forwarded to the hosted store
//! - Compliance report preview from quiz answers
//! - Quiz answer options

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod store;


pub use config::StoreConfig;
pub use fallback::FallbackLog;
pub use store::{StoreError, SupabaseStore, WaitlistStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WaitlistStore>,
    pub fallback: Arc<FallbackLog>,
}

impl AppState {
    pub fn new(store: Arc<dyn WaitlistStore>, fallback: FallbackLog) -> Self {
        Self {
            store,
            fallback: Arc::new(fallback),
        }
    }
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    // CORS configuration for the site front end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/waitlist", post(handlers::join_waitlist))
        .route("/api/quiz/options", get(handlers::get_quiz_options))
        .route("/api/report", post(handlers::generate_report))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

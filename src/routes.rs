use std::sync::Arc;

use axum::{http::Request, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

use crate::config::StatusPolicy;
use crate::handlers;
use crate::store::RideStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RideStore>,
    pub status_policy: StatusPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn RideStore>, status_policy: StatusPolicy) -> Self {
        Self {
            store,
            status_policy,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/rides", get(handlers::list_rides).post(handlers::create_ride))
        .route("/rides/{id}", get(handlers::get_ride))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .with_state(state)
}

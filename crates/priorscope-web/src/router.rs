//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    compute::api_compute,
    presets::api_presets,
    scenarios::{
        api_scenario_create, api_scenario_current, api_scenario_delete, api_scenario_get,
        api_scenario_list, api_scenario_update,
    },
    share::{api_share_decode, api_share_encode},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Calculator
        .route("/api/compute", post(api_compute))

        // Scenarios
        .route("/api/scenarios", get(api_scenario_list).post(api_scenario_create))
        .route("/api/scenarios/current", get(api_scenario_current))
        .route(
            "/api/scenarios/{id}",
            get(api_scenario_get).put(api_scenario_update).delete(api_scenario_delete),
        )

        // Presets & sharing
        .route("/api/presets", get(api_presets))
        .route("/api/share", post(api_share_encode))
        .route("/api/share/{encoded}", get(api_share_decode))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

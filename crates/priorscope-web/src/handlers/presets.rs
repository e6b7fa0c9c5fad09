//! Built-in preset catalog endpoint.

use axum::extract::State;
use axum::Json;
use priorscope_common::ScenarioDraft;
use priorscope_core::presets::built_in_presets;

use crate::state::SharedState;

/// GET /api/presets
pub async fn api_presets(State(state): State<SharedState>) -> Json<Vec<ScenarioDraft>> {
    Json(built_in_presets(state.ids.as_ref()))
}

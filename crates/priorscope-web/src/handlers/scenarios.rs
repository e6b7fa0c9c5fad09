//! Scenario CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use priorscope_common::{PriorscopeError, Scenario, ScenarioDraft};
use priorscope_core::clamp_prior;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

/// GET /api/scenarios
pub async fn api_scenario_list(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Scenario>>> {
    Ok(Json(state.store.list().await?))
}

/// POST /api/scenarios — accept a draft, mint identity, persist.
pub async fn api_scenario_create(
    State(state): State<SharedState>,
    Json(mut draft): Json<ScenarioDraft>,
) -> ApiResult<(StatusCode, Json<Scenario>)> {
    draft.prior_probability = clamp_prior(draft.prior_probability);
    let scenario = Scenario::from_draft(draft, state.ids.as_ref(), Utc::now());
    state.store.save(&scenario).await?;
    Ok((StatusCode::CREATED, Json(scenario)))
}

/// GET /api/scenarios/current
pub async fn api_scenario_current(
    State(state): State<SharedState>,
) -> ApiResult<Json<Scenario>> {
    match state.store.load_current().await? {
        Some(scenario) => Ok(Json(scenario)),
        None => Err(ApiError(PriorscopeError::NotFound("no current scenario".to_string()))),
    }
}

/// GET /api/scenarios/{id}
pub async fn api_scenario_get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Scenario>> {
    match state.store.load(id).await? {
        Some(scenario) => Ok(Json(scenario)),
        None => Err(ApiError(PriorscopeError::NotFound(id.to_string()))),
    }
}

/// PUT /api/scenarios/{id} — replace content, keep identity and
/// creation time, bump `modified_at`.
pub async fn api_scenario_update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ScenarioDraft>,
) -> ApiResult<Json<Scenario>> {
    let existing = state
        .store
        .load(id)
        .await?
        .ok_or_else(|| ApiError(PriorscopeError::NotFound(id.to_string())))?;

    let updated = Scenario {
        id: existing.id,
        name: draft.name,
        hypotheses: draft.hypotheses,
        prior_probability: clamp_prior(draft.prior_probability),
        evidence: draft.evidence,
        created_at: existing.created_at,
        modified_at: Utc::now(),
    };
    state.store.save(&updated).await?;
    Ok(Json(updated))
}

/// DELETE /api/scenarios/{id}
pub async fn api_scenario_delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

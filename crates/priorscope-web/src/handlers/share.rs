//! Share-link encode/decode endpoints.

use axum::extract::{Path, State};
use axum::Json;
use priorscope_common::{PriorscopeError, ScenarioDraft};
use priorscope_share::{decode_scenario, encode_scenario, share_url};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub encoded: String,
    pub url: String,
}

/// POST /api/share — draft in, token and full URL out.
pub async fn api_share_encode(
    State(state): State<SharedState>,
    Json(draft): Json<ScenarioDraft>,
) -> ApiResult<Json<ShareResponse>> {
    let encoded = encode_scenario(&draft)?;
    let url = share_url(&state.share_base, &draft)?;
    Ok(Json(ShareResponse { encoded, url }))
}

/// GET /api/share/{encoded} — 422 on an undecodable token so the
/// caller can show an error and fall back.
pub async fn api_share_decode(
    Path(encoded): Path<String>,
) -> ApiResult<Json<ScenarioDraft>> {
    match decode_scenario(&encoded) {
        Some(draft) => Ok(Json(draft)),
        None => Err(ApiError(PriorscopeError::Codec(
            "share token could not be decoded".to_string(),
        ))),
    }
}

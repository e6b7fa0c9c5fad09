//! Posterior calculation endpoint.

use axum::Json;
use priorscope_common::{CalculatedResult, Evidence};
use priorscope_core::{calculate_posterior, clamp_prior};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub prior_probability: f64,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

/// POST /api/compute — pure; touches no stored state.
///
/// The prior is held to [1, 99] here: the calculator leaves the
/// degenerate 0/100 endpoints to its callers, and this endpoint is
/// one.
pub async fn api_compute(Json(request): Json<ComputeRequest>) -> Json<CalculatedResult> {
    let prior = clamp_prior(request.prior_probability);
    Json(calculate_posterior(prior, &request.evidence))
}

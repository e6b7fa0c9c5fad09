/// Core entity types for two-hypothesis scenarios.
/// These are the units the calculator, store, and share codec exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::IdSource;

// ---------------------------------------------------------------------------
// Evidence
// ---------------------------------------------------------------------------

/// One observation bearing on the two hypotheses.
///
/// Likelihoods are P(evidence | Hi) as percentages in [0, 100];
/// `certainty` is confidence that the evidence itself is accurate.
/// `order` is display bookkeeping only — the calculator consumes
/// evidence in the order the list presents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: Uuid,
    pub description: String,
    pub likelihood_h1: f64,
    pub likelihood_h2: f64,
    pub certainty: f64,
    pub order: u32,
}

impl Evidence {
    /// A fresh evidence row with the neutral defaults (50/50 likelihoods,
    /// 75% certainty, empty description).
    pub fn with_defaults(id: Uuid, order: u32) -> Self {
        Self {
            id,
            description: String::new(),
            likelihood_h1: 50.0,
            likelihood_h2: 50.0,
            certainty: 75.0,
            order,
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// The two competing claims under comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypotheses {
    pub h1: String,
    pub h2: String,
}

/// A complete saved scenario: identity, hypotheses, prior, and the
/// ordered evidence list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: Uuid,
    pub name: String,
    pub hypotheses: Hypotheses,
    /// P(H1) before any evidence, as a percentage. Callers keep this
    /// inside (1, 99); exactly 0 or 100 would degenerate the odds.
    pub prior_probability: f64,
    pub evidence: Vec<Evidence>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A scenario stripped of identity and timestamps — the unit presets
/// and share links deal in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    pub name: String,
    pub hypotheses: Hypotheses,
    pub prior_probability: f64,
    pub evidence: Vec<Evidence>,
}

impl Scenario {
    /// Adopt a draft as a full scenario with a fresh id and timestamps.
    pub fn from_draft(draft: ScenarioDraft, ids: &dyn IdSource, now: DateTime<Utc>) -> Self {
        Self {
            id: ids.next_id(),
            name: draft.name,
            hypotheses: draft.hypotheses,
            prior_probability: draft.prior_probability,
            evidence: draft.evidence,
            created_at: now,
            modified_at: now,
        }
    }

    /// Strip identity and timestamps for sharing.
    pub fn to_draft(&self) -> ScenarioDraft {
        ScenarioDraft {
            name: self.name.clone(),
            hypotheses: self.hypotheses.clone(),
            prior_probability: self.prior_probability,
            evidence: self.evidence.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Calculation output
// ---------------------------------------------------------------------------

/// Paired H1/H2 percentages; h2 is always the exact complement of h1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPair {
    pub h1: f64,
    pub h2: f64,
}

/// One record per evidence item applied, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub evidence_id: Uuid,
    pub evidence_name: String,
    /// Raw lh1/lh2 before certainty weighting.
    pub likelihood_ratio: f64,
    /// likelihood_ratio raised to certainty/100.
    pub certainty_adjusted: f64,
    /// Cumulative odds after this step.
    pub odds_after: f64,
    /// Unclamped probability snapshot after this step.
    pub probability_after: ProbabilityPair,
}

/// Final calculator output: headline probabilities plus the full
/// per-step audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedResult {
    pub h1_probability: f64,
    pub h2_probability: f64,
    pub steps: Vec<CalculationStep>,
}

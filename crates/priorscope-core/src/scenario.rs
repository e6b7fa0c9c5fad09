//! Scenario state machine.
//!
//! All edits flow through `apply(state, action, ...)` — a pure
//! transition function over a closed set of action variants. Every
//! action yields a fresh `Scenario` with `modified_at` stamped; the
//! previous snapshot is never mutated.

use chrono::{DateTime, Utc};
use priorscope_common::{Evidence, Hypotheses, IdSource, Scenario, ScenarioDraft};
use uuid::Uuid;

/// Band priors are held to on the way in. Exactly 0 or 100 would
/// degenerate the starting odds, so every producing surface clamps
/// before the calculator ever sees the value.
pub const PRIOR_MIN: f64 = 1.0;
pub const PRIOR_MAX: f64 = 99.0;

/// Constrain a prior percentage to the accepted band.
pub fn clamp_prior(value: f64) -> f64 {
    value.clamp(PRIOR_MIN, PRIOR_MAX)
}

/// Which hypothesis text an `UpdateHypothesis` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypothesisSlot {
    H1,
    H2,
}

/// Partial evidence update; `None` fields are left untouched.
/// Numeric fields are clamped to [0, 100] on application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidencePatch {
    pub description: Option<String>,
    pub likelihood_h1: Option<f64>,
    pub likelihood_h2: Option<f64>,
    pub certainty: Option<f64>,
}

/// Closed set of scenario edits.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateHypothesis { slot: HypothesisSlot, text: String },
    /// Clamped to [1, 99] on application so the calculator never sees
    /// a degenerate prior through this path.
    UpdatePrior(f64),
    AddEvidence,
    RemoveEvidence(Uuid),
    UpdateEvidence { id: Uuid, patch: EvidencePatch },
    /// Adopt a shared/preset draft under a fresh identity.
    LoadScenario(ScenarioDraft),
    Rename(String),
}

/// Build the initial scenario: even prior, one neutral evidence row.
pub fn initial_scenario(ids: &dyn IdSource, now: DateTime<Utc>) -> Scenario {
    Scenario {
        id: ids.next_id(),
        name: "New Scenario".to_string(),
        hypotheses: Hypotheses {
            h1: "Hypothesis 1".to_string(),
            h2: "Hypothesis 2".to_string(),
        },
        prior_probability: 50.0,
        evidence: vec![Evidence::with_defaults(ids.next_id(), 1)],
        created_at: now,
        modified_at: now,
    }
}

/// Apply one action, returning the next state.
pub fn apply(state: &Scenario, action: Action, ids: &dyn IdSource, now: DateTime<Utc>) -> Scenario {
    let mut next = state.clone();
    next.modified_at = now;

    match action {
        Action::UpdateHypothesis { slot, text } => match slot {
            HypothesisSlot::H1 => next.hypotheses.h1 = text,
            HypothesisSlot::H2 => next.hypotheses.h2 = text,
        },
        Action::UpdatePrior(value) => {
            next.prior_probability = clamp_prior(value);
        }
        Action::AddEvidence => {
            let order = next.evidence.len() as u32 + 1;
            next.evidence.push(Evidence::with_defaults(ids.next_id(), order));
        }
        Action::RemoveEvidence(id) => {
            // Unknown ids fall through as a no-op on the list.
            next.evidence.retain(|e| e.id != id);
        }
        Action::UpdateEvidence { id, patch } => {
            if let Some(evidence) = next.evidence.iter_mut().find(|e| e.id == id) {
                if let Some(description) = patch.description {
                    evidence.description = description;
                }
                if let Some(lh1) = patch.likelihood_h1 {
                    evidence.likelihood_h1 = lh1.clamp(0.0, 100.0);
                }
                if let Some(lh2) = patch.likelihood_h2 {
                    evidence.likelihood_h2 = lh2.clamp(0.0, 100.0);
                }
                if let Some(certainty) = patch.certainty {
                    evidence.certainty = certainty.clamp(0.0, 100.0);
                }
            }
        }
        Action::LoadScenario(draft) => {
            next = Scenario::from_draft(draft, ids, now);
        }
        Action::Rename(name) => {
            next.name = name;
        }
    }

    next
}

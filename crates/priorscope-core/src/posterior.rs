//! Sequential Bayesian odds updating for two hypotheses.
//!
//! The prior probability is converted to odds, each piece of evidence
//! multiplies the odds by a certainty-weighted likelihood ratio, and
//! the running odds are converted back to probabilities at every step
//! to produce a full audit trail.

use priorscope_common::{CalculatedResult, CalculationStep, Evidence, ProbabilityPair};

/// Display name used when an evidence row has an empty description.
const UNNAMED_EVIDENCE: &str = "Unnamed Evidence";

/// Floor applied to each likelihood before dividing. A 0% likelihood
/// is treated as "extremely unlikely" (1%), never impossible, so a
/// single entry can't drive the odds to exactly zero or infinity.
const LIKELIHOOD_FLOOR: f64 = 1.0;

/// Final headline probabilities are kept inside this band; individual
/// step probabilities are reported unclamped.
const FINAL_MIN: f64 = 0.1;
const FINAL_MAX: f64 = 99.9;

/// Compute posterior probabilities for H1 vs H2 from a prior and an
/// ordered evidence list.
///
/// Pure and total: no state, no I/O, no error paths. Evidence is
/// applied strictly in slice order — callers present the list already
/// sorted. `prior_probability` is a percentage; callers keep it inside
/// (1, 99) since exactly 0 or 100 degenerates the starting odds.
///
/// Certainty is deliberately not clamped here: certainty 0 neutralizes
/// the evidence (ratio^0 = 1), 100 applies the full ratio, values
/// above 100 over-amplify and negative values invert the ratio.
pub fn calculate_posterior(prior_probability: f64, evidence: &[Evidence]) -> CalculatedResult {
    // Odds = P(H1) / P(H2) = p / (1 - p)
    let prior = prior_probability / 100.0;
    let mut odds = prior / (1.0 - prior);

    let mut steps = Vec::with_capacity(evidence.len());

    for item in evidence {
        let lh1 = item.likelihood_h1.max(LIKELIHOOD_FLOOR) / 100.0;
        let lh2 = item.likelihood_h2.max(LIKELIHOOD_FLOOR) / 100.0;
        let likelihood_ratio = lh1 / lh2;

        let certainty_factor = item.certainty / 100.0;
        let adjusted = likelihood_ratio.powf(certainty_factor);

        odds *= adjusted;

        let h1_after = odds / (1.0 + odds) * 100.0;
        steps.push(CalculationStep {
            evidence_id: item.id,
            evidence_name: if item.description.is_empty() {
                UNNAMED_EVIDENCE.to_string()
            } else {
                item.description.clone()
            },
            likelihood_ratio,
            certainty_adjusted: adjusted,
            odds_after: odds,
            probability_after: ProbabilityPair {
                h1: h1_after,
                h2: 100.0 - h1_after,
            },
        });
    }

    let h1_probability = (odds / (1.0 + odds) * 100.0).clamp(FINAL_MIN, FINAL_MAX);

    CalculatedResult {
        h1_probability,
        h2_probability: 100.0 - h1_probability,
        steps,
    }
}

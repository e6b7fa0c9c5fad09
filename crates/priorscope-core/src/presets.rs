//! Built-in scenario presets.
//!
//! Drafts carry no identity; evidence ids are minted from the supplied
//! `IdSource` when the catalog is built, so each instantiation gets
//! fresh, collision-free rows.

use priorscope_common::{Evidence, Hypotheses, IdSource, ScenarioDraft};

fn evidence(
    ids: &dyn IdSource,
    description: &str,
    lh1: f64,
    lh2: f64,
    certainty: f64,
    order: u32,
) -> Evidence {
    Evidence {
        id: ids.next_id(),
        description: description.to_string(),
        likelihood_h1: lh1,
        likelihood_h2: lh2,
        certainty,
        order,
    }
}

/// The shipped preset catalog.
pub fn built_in_presets(ids: &dyn IdSource) -> Vec<ScenarioDraft> {
    vec![
        ScenarioDraft {
            name: "Historical Event - Moon Landing".to_string(),
            hypotheses: Hypotheses {
                h1: "The moon landing was real".to_string(),
                h2: "The moon landing was faked".to_string(),
            },
            prior_probability: 50.0,
            evidence: vec![
                evidence(ids, "High-quality video footage exists", 95.0, 40.0, 100.0, 1),
                evidence(ids, "USSR acknowledged the landing", 90.0, 20.0, 100.0, 2),
                evidence(ids, "No credible whistleblowers in 50+ years", 85.0, 10.0, 95.0, 3),
                evidence(ids, "Technology was theoretically possible", 80.0, 60.0, 90.0, 4),
            ],
        },
        ScenarioDraft {
            name: "Policy Decision - Universal Basic Income".to_string(),
            hypotheses: Hypotheses {
                h1: "UBI would help the economy".to_string(),
                h2: "UBI would harm the economy".to_string(),
            },
            prior_probability: 50.0,
            evidence: vec![
                evidence(ids, "Alaska's oil dividend shows stable employment", 70.0, 40.0, 80.0, 1),
                evidence(ids, "Finland pilot: improved wellbeing, no job loss", 75.0, 50.0, 75.0, 2),
                evidence(ids, "Inflation concerns from economists", 40.0, 70.0, 70.0, 3),
                evidence(ids, "Would cost 10% of federal budget", 50.0, 65.0, 85.0, 4),
            ],
        },
        ScenarioDraft {
            name: "Medical Diagnosis".to_string(),
            hypotheses: Hypotheses {
                h1: "Patient has Disease A (common)".to_string(),
                h2: "Patient has Disease B (rare)".to_string(),
            },
            prior_probability: 50.0,
            evidence: vec![
                evidence(ids, "Fever present (90% of A, 95% of B)", 90.0, 95.0, 100.0, 1),
                evidence(ids, "Rash present (20% of A, 80% of B)", 20.0, 80.0, 100.0, 2),
                evidence(ids, "Test positive (70% accuracy)", 70.0, 30.0, 85.0, 3),
                evidence(ids, "Patient is young (A common in young)", 75.0, 30.0, 100.0, 4),
            ],
        },
    ]
}

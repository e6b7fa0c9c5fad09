//! priorscope-common — Shared types, errors, and capabilities used across all Priorscope crates.

pub mod error;
pub mod entities;
pub mod ids;

// Re-export commonly used types
pub use entities::{
    CalculatedResult, CalculationStep, Evidence, Hypotheses, ProbabilityPair, Scenario,
    ScenarioDraft,
};
pub use error::{PriorscopeError, Result};
pub use ids::{IdSource, RandomIds};

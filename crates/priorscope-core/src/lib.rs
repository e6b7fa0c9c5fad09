//! priorscope-core — Posterior calculator, scenario state machine, and preset catalog.

pub mod posterior;
pub mod presets;
pub mod scenario;

pub use posterior::calculate_posterior;
pub use scenario::{clamp_prior, Action, EvidencePatch, HypothesisSlot};

//! priorscope-web — HTTP API over the calculator, store, presets, and share codec.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

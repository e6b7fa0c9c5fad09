pub mod compute;
pub mod presets;
pub mod scenarios;
pub mod share;

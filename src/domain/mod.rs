//! Domain layer: pricing engine, lead form state and value objects.

pub mod calculator;
pub mod lead;
pub mod types;

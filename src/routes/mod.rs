pub mod calculator;
pub mod relay;

pub mod chart;
pub mod export;
pub mod stats;
pub mod tokens;

pub mod chart;
pub mod domain;
pub mod stats;

pub use chart::*;
pub use domain::*;
pub use stats::*;

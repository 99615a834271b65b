// Engine module - Core processing logic (assembly, integration, statistics, charting)
// This layer sits between raw log tokens (providers) and CLI presentation

pub mod assembler;
pub mod charge;
pub mod chart;
pub mod energy;
pub mod export;
pub mod normalize;
pub mod stats;

pub use assembler::assemble;
pub use chart::{
    DEFAULT_MAX_POINTS, DownsampleOptions, build_cycle_chart, build_dataset_charts, downsample,
    extract_metric, flatten_cycle_points,
};
pub use charge::calculate_charge;
pub use energy::calculate_energy;
pub use export::{export_csv, export_json};
pub use normalize::normalize_cycles;
pub use stats::calculate_cycle_stats;

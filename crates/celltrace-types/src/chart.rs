use serde::{Deserialize, Serialize};

/// One plottable sample on a cycle's continuous chart timeline.
///
/// `time` is offset-adjusted so that consecutive steps chain onto a
/// single axis even though each step's instrument clock restarts at
/// its own first sample. `original_time` keeps the unmodified
/// instrument timestamp and `step` the owning step id, for
/// traceability back to the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: f64,
    pub voltage: f64,
    pub current: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,
    pub original_time: f64,
    pub step: i64,
}

/// Which per-point metric to extract into a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Voltage,
    Current,
    Charge,
}

/// Parallel x/y arrays for one metric over one cycle.
///
/// `y` entries are `None` where the source point carried no value for
/// the metric (only possible for charge). `has_data` is true iff at
/// least one `y` is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSeries {
    pub x: Vec<f64>,
    pub y: Vec<Option<f64>>,
    pub has_data: bool,
}

/// Complete chart bundle for one cycle: the flattened point sequence
/// plus one extracted series per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleChart {
    pub cycle: i64,
    pub points: Vec<ChartPoint>,
    pub voltage: MetricSeries,
    pub current: MetricSeries,
    pub charge: MetricSeries,
}

use std::collections::BTreeMap;

use celltrace_types::{ChartPoint, Cycle, CycleChart, Metric, MetricSeries};

/// Default decimation target for chart rendering.
pub const DEFAULT_MAX_POINTS: usize = 600;

/// Decimation settings for [`flatten_cycle_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownsampleOptions {
    pub max_points: usize,
}

impl Default for DownsampleOptions {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Flatten a cycle's steps onto one continuous chart timeline.
///
/// Each step's instrument clock restarts at its own first sample, so a
/// running offset chains every step onto the previous step's final
/// chart time. Steps with no samples contribute nothing and leave the
/// offset untouched. Passing `downsample_opts` decimates the result.
pub fn flatten_cycle_points(
    cycle: &Cycle,
    downsample_opts: Option<DownsampleOptions>,
) -> Vec<ChartPoint> {
    let mut raw = Vec::new();
    let mut offset = 0.0;

    for step in &cycle.steps {
        let Some(first) = step.dp.first() else {
            continue;
        };
        let base = first.time;
        for point in &step.dp {
            raw.push(ChartPoint {
                time: offset + (point.time - base),
                voltage: point.voltage,
                current: point.current,
                charge: point.charge,
                original_time: point.time,
                step: step.step,
            });
        }
        if let Some(last) = raw.last() {
            offset = last.time;
        }
    }

    match downsample_opts {
        Some(opts) => downsample(&raw, opts.max_points),
        None => raw,
    }
}

/// Keep every stride-th element (stride = ceil(len / max_points)),
/// always retaining the terminal element - it typically carries the
/// most recent or most extreme signal value. Output length is between
/// `min(len, max_points)` and `max_points + 1`.
pub fn downsample<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    if max_points == 0 {
        return Vec::new();
    }

    let stride = points.len().div_ceil(max_points);
    let mut result: Vec<T> = points.iter().step_by(stride).cloned().collect();
    if (points.len() - 1) % stride != 0 {
        result.push(points[points.len() - 1].clone());
    }
    result
}

/// Extract one metric from a flattened point sequence into parallel
/// x/y arrays. Charge uses the point's own optional field; no
/// integration happens here.
pub fn extract_metric(points: &[ChartPoint], metric: Metric) -> MetricSeries {
    let mut series = MetricSeries::default();
    for point in points {
        let y = match metric {
            Metric::Voltage => Some(point.voltage),
            Metric::Current => Some(point.current),
            Metric::Charge => point.charge,
        };
        series.has_data |= y.is_some();
        series.x.push(point.time);
        series.y.push(y);
    }
    series
}

/// Per-cycle convenience: flattened points plus all three metric series.
pub fn build_cycle_chart(cycle: &Cycle, downsample_opts: Option<DownsampleOptions>) -> CycleChart {
    let points = flatten_cycle_points(cycle, downsample_opts);
    CycleChart {
        cycle: cycle.cycle,
        voltage: extract_metric(&points, Metric::Voltage),
        current: extract_metric(&points, Metric::Current),
        charge: extract_metric(&points, Metric::Charge),
        points,
    }
}

/// Per-dataset convenience: one chart bundle per cycle, keyed by id.
pub fn build_dataset_charts(
    cycles: &[Cycle],
    downsample_opts: Option<DownsampleOptions>,
) -> BTreeMap<i64, CycleChart> {
    cycles
        .iter()
        .map(|cycle| (cycle.cycle, build_cycle_chart(cycle, downsample_opts)))
        .collect()
}

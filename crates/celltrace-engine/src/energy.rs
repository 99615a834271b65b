use celltrace_types::DataPoint;

use crate::charge::EQUAL_TOLERANCE;

/// Net energy transferred during one step, in watt-seconds.
///
/// Unlike charge, energy has no authoritative instrument-reported
/// field to fall back on: a single non-finite voltage or current makes
/// the whole step's energy unknowable, so this returns `None` rather
/// than a misleading partial sum. Empty input and single samples yield
/// `Some(0.0)` (nothing to integrate over).
///
/// Constant power integrates in closed form; otherwise trapezoidal,
/// where intervals with `dt <= 0` (duplicate or non-monotonic
/// timestamps) contribute nothing instead of corrupting the sum.
pub fn calculate_energy(dp: &[DataPoint]) -> Option<f64> {
    if dp.is_empty() {
        return Some(0.0);
    }

    if dp
        .iter()
        .any(|d| !d.voltage.is_finite() || !d.current.is_finite())
    {
        return None;
    }

    if dp.len() == 1 {
        return Some(0.0);
    }

    let powers: Vec<f64> = dp.iter().map(|d| d.voltage * d.current).collect();

    if powers.iter().all(|p| (p - powers[0]).abs() < EQUAL_TOLERANCE) {
        return Some(powers[0] * (dp[dp.len() - 1].time - dp[0].time));
    }

    let mut energy = 0.0;
    for i in 0..dp.len() - 1 {
        let dt = dp[i + 1].time - dp[i].time;
        if dt <= 0.0 {
            continue;
        }
        energy += (powers[i] + powers[i + 1]) / 2.0 * dt;
    }
    Some(energy)
}

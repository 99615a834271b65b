use celltrace_types::DataPoint;

/// Absolute tolerance for treating sampled values as equal.
pub(crate) const EQUAL_TOLERANCE: f64 = 1e-9;

/// Net charge transferred during one step, in ampere-seconds.
///
/// Layered fallback policy:
/// 1. The instrument-reported cumulative charge is authoritative: if
///    any sample carries one, return the last such value.
/// 2. Constant current (all samples within tolerance of the first):
///    closed-form `i * dt` over the whole step, avoiding needless
///    trapezoidal rounding.
/// 3. Trapezoidal rule over consecutive samples, signed - discharge
///    steps integrate to a negative charge.
///
/// Empty input yields 0.
pub fn calculate_charge(dp: &[DataPoint]) -> f64 {
    let Some(first) = dp.first() else {
        return 0.0;
    };
    let last = &dp[dp.len() - 1];

    if let Some(charge) = dp.iter().rev().find_map(|d| d.charge) {
        return charge;
    }

    if dp
        .iter()
        .all(|d| (d.current - first.current).abs() < EQUAL_TOLERANCE)
    {
        return first.current * (last.time - first.time);
    }

    dp.windows(2)
        .map(|w| (w[0].current + w[1].current) / 2.0 * (w[1].time - w[0].time))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: f64, current: f64, charge: Option<f64>) -> DataPoint {
        DataPoint {
            time,
            voltage: 3.7,
            current,
            charge,
        }
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(calculate_charge(&[]), 0.0);
    }

    #[test]
    fn last_explicit_charge_wins() {
        let dp = vec![
            point(0.0, 0.1, Some(1.0)),
            point(5.0, 2.0, Some(2.5)),
            point(10.0, -3.0, None),
        ];
        assert_eq!(calculate_charge(&dp), 2.5);
    }

    #[test]
    fn constant_current_uses_closed_form() {
        let dp = vec![point(0.0, 0.5, None), point(10.0, 0.5, None)];
        assert_eq!(calculate_charge(&dp), 5.0);
    }

    #[test]
    fn varying_current_uses_trapezoidal_rule() {
        let dp = vec![point(0.0, 1.0, None), point(1.0, 3.0, None)];
        assert_eq!(calculate_charge(&dp), 2.0);
    }

    #[test]
    fn discharge_integrates_negative() {
        let dp = vec![point(0.0, -0.4, None), point(5.0, -0.4, None)];
        assert_eq!(calculate_charge(&dp), -2.0);
    }

    #[test]
    fn single_point_yields_zero() {
        let dp = vec![point(3.0, 0.5, None)];
        assert_eq!(calculate_charge(&dp), 0.0);
    }
}

use celltrace_types::{Cycle, CycleStats};

use crate::charge::calculate_charge;
use crate::energy::calculate_energy;

/// Aggregate per-step charge and energy into cycle-level totals and
/// efficiencies. Pure projection: iterates the cycle's steps once and
/// never mutates them.
///
/// A single step with unavailable energy poisons the whole cycle's
/// energy aggregate - reporting a partial total as if it covered the
/// full cycle would silently misstate the efficiency. Ratios are
/// `None` when their denominator is not strictly positive.
pub fn calculate_cycle_stats(cycle: &Cycle) -> CycleStats {
    let mut total_charge = 0.0;
    let mut charge_input = 0.0;
    let mut discharge_output = 0.0;
    let mut total_points = 0;

    let mut energy_input = 0.0;
    let mut energy_output = 0.0;
    let mut energy_available = true;
    let mut energy_computed = false;

    for step in &cycle.steps {
        let step_charge = calculate_charge(&step.dp);
        total_charge += step_charge;
        if step_charge >= 0.0 {
            charge_input += step_charge;
        } else {
            discharge_output += -step_charge;
        }

        match calculate_energy(&step.dp) {
            Some(step_energy) => {
                if step_energy >= 0.0 {
                    energy_input += step_energy;
                } else {
                    energy_output += -step_energy;
                }
                energy_computed = true;
            }
            None => energy_available = false,
        }

        total_points += step.dp.len();
    }

    let has_energy_data = energy_available && energy_computed;

    CycleStats {
        total_steps: cycle.steps.len(),
        total_points,
        total_charge,
        charge_input,
        discharge_output,
        efficiency: (charge_input > 0.0).then(|| discharge_output / charge_input),
        has_energy_data,
        energy_input: has_energy_data.then_some(energy_input),
        energy_output: has_energy_data.then_some(energy_output),
        energy_efficiency: (has_energy_data && energy_input > 0.0)
            .then(|| energy_output / energy_input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celltrace_types::{DataPoint, Step};

    fn point(time: f64, voltage: f64, current: f64) -> DataPoint {
        DataPoint {
            time,
            voltage,
            current,
            charge: None,
        }
    }

    fn charge_discharge_cycle() -> Cycle {
        Cycle {
            cycle: 1,
            steps: vec![
                Step {
                    step: 1,
                    dp: vec![point(0.0, 3.7, 0.5), point(10.0, 3.75, 0.5)],
                },
                Step {
                    step: 2,
                    dp: vec![point(0.0, 3.65, -0.4), point(5.0, 3.6, -0.4)],
                },
            ],
        }
    }

    #[test]
    fn aggregates_points_charge_and_efficiency() {
        let stats = calculate_cycle_stats(&charge_discharge_cycle());

        assert_eq!(stats.total_steps, 2);
        assert_eq!(stats.total_points, 4);
        assert!((stats.total_charge - 3.0).abs() < 1e-6);
        assert!((stats.charge_input - 5.0).abs() < 1e-6);
        assert!((stats.discharge_output - 2.0).abs() < 1e-6);
        assert!((stats.efficiency.unwrap() - 0.4).abs() < 1e-6);

        assert!(stats.has_energy_data);
        assert!((stats.energy_input.unwrap() - 18.625).abs() < 1e-6);
        assert!((stats.energy_output.unwrap() - 7.25).abs() < 1e-6);
        assert!((stats.energy_efficiency.unwrap() - 0.3892617).abs() < 1e-6);
    }

    #[test]
    fn no_positive_charge_means_no_efficiency() {
        let cycle = Cycle {
            cycle: 2,
            steps: vec![Step {
                step: 1,
                dp: vec![point(0.0, 3.5, -0.2), point(6.0, 3.45, -0.25)],
            }],
        };

        let stats = calculate_cycle_stats(&cycle);
        assert!((stats.charge_input - 0.0).abs() < 1e-6);
        assert!(stats.discharge_output > 0.0);
        assert_eq!(stats.efficiency, None);

        assert!(stats.has_energy_data);
        assert_eq!(stats.energy_input, Some(0.0));
        assert!(stats.energy_output.unwrap() > 0.0);
        assert_eq!(stats.energy_efficiency, None);
    }

    #[test]
    fn one_unknowable_step_poisons_cycle_energy() {
        let cycle = Cycle {
            cycle: 3,
            steps: vec![
                Step {
                    step: 1,
                    dp: vec![point(0.0, 3.7, 0.5), point(10.0, 3.7, 0.5)],
                },
                Step {
                    step: 2,
                    dp: vec![point(0.0, f64::NAN, 0.3), point(5.0, f64::NAN, 0.3)],
                },
            ],
        };

        let stats = calculate_cycle_stats(&cycle);
        assert!(!stats.has_energy_data);
        assert_eq!(stats.energy_input, None);
        assert_eq!(stats.energy_output, None);
        assert_eq!(stats.energy_efficiency, None);
        // Charge has its own fallbacks and is unaffected.
        assert!(stats.charge_input > 0.0);
    }

    #[test]
    fn empty_cycle_has_no_energy_data() {
        let cycle = Cycle {
            cycle: 4,
            steps: vec![],
        };

        let stats = calculate_cycle_stats(&cycle);
        assert_eq!(stats.total_steps, 0);
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.efficiency, None);
        assert!(!stats.has_energy_data);
    }
}

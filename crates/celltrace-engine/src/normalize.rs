use std::collections::BTreeMap;

use celltrace_types::{Cycle, ParsedResult, Step};

/// Merge cycle fragments sharing the same id and sort ascending.
///
/// Cycler logs may reopen a cycle number across disjoint token blocks;
/// the assembler emits one Cycle record per block. This concatenates
/// each id's step lists in first-seen order and emits exactly one Cycle
/// per distinct id. The output is deep-copied: later derived
/// computations can never alias back into the input.
///
/// Idempotent on already-normalized input.
pub fn normalize_cycles(result: &ParsedResult) -> Vec<Cycle> {
    let mut groups: BTreeMap<i64, Vec<Step>> = BTreeMap::new();

    for cycle in &result.cycles {
        groups
            .entry(cycle.cycle)
            .or_default()
            .extend(cycle.steps.iter().cloned());
    }

    groups
        .into_iter()
        .map(|(cycle, steps)| Cycle { cycle, steps })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use celltrace_types::DataPoint;

    fn step(id: i64, times: &[f64]) -> Step {
        Step {
            step: id,
            dp: times
                .iter()
                .map(|&time| DataPoint {
                    time,
                    voltage: 3.7,
                    current: 0.5,
                    charge: None,
                })
                .collect(),
        }
    }

    #[test]
    fn merges_fragments_in_first_seen_order() {
        let result = ParsedResult {
            cycles: vec![
                Cycle {
                    cycle: 2,
                    steps: vec![step(1, &[0.0])],
                },
                Cycle {
                    cycle: 1,
                    steps: vec![step(1, &[0.0])],
                },
                Cycle {
                    cycle: 2,
                    steps: vec![step(2, &[5.0])],
                },
            ],
        };

        let cycles = normalize_cycles(&result);
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].cycle, 1);
        assert_eq!(cycles[1].cycle, 2);
        assert_eq!(cycles[1].steps.len(), 2);
        assert_eq!(cycles[1].steps[0].step, 1);
        assert_eq!(cycles[1].steps[1].step, 2);
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let result = ParsedResult {
            cycles: vec![
                Cycle {
                    cycle: 1,
                    steps: vec![step(1, &[0.0, 1.0])],
                },
                Cycle {
                    cycle: 2,
                    steps: vec![step(1, &[0.0])],
                },
            ],
        };

        let once = normalize_cycles(&result);
        let twice = normalize_cycles(&ParsedResult {
            cycles: once.clone(),
        });
        assert_eq!(once, twice);
        assert_eq!(once, result.cycles);
    }

    #[test]
    fn output_does_not_alias_input() {
        let result = ParsedResult {
            cycles: vec![Cycle {
                cycle: 1,
                steps: vec![step(1, &[0.0])],
            }],
        };

        let mut cycles = normalize_cycles(&result);
        cycles[0].steps[0].dp[0].time = 99.0;
        assert_eq!(result.cycles[0].steps[0].dp[0].time, 0.0);
    }
}

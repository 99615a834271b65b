use celltrace_types::{Cycle, DataPoint, ParsedResult, Step, Token};

/// Assemble a token stream into the cycle hierarchy.
///
/// Single pass, one token at a time, no lookahead. Four keys act as
/// structural markers: `cy` opens a cycle, `st` opens a step, `dp`
/// appends a sample to the pending step, `de` closes the pending step.
/// Every other key is ignored so newer log revisions can add keys
/// without breaking older readers.
///
/// This never fails: cycler logs are not guaranteed to carry explicit
/// ids or well-formed numeric fields, so malformed ids fall back to
/// deterministic auto-numbering and malformed samples are dropped
/// point-by-point.
pub fn assemble(tokens: &[Token]) -> ParsedResult {
    let mut cycles: Vec<Cycle> = Vec::new();
    let mut current_cycle: Option<Cycle> = None;
    let mut current_step: Option<Step> = None;

    for token in tokens {
        match token.key.as_str() {
            "cy" => {
                flush_step(&mut current_cycle, &mut current_step);
                if let Some(cycle) = current_cycle.take() {
                    cycles.push(cycle);
                }
                // Auto-numbering restarts per stream: id defaults to
                // (cycles produced so far) + 1.
                let id = parse_id(&token.values).unwrap_or(cycles.len() as i64 + 1);
                current_cycle = Some(Cycle {
                    cycle: id,
                    steps: Vec::new(),
                });
            }
            "st" => {
                flush_step(&mut current_cycle, &mut current_step);
                // Step auto-numbering restarts per cycle. The pending
                // step was flushed above, so the flushed count is exact.
                let fallback = current_cycle
                    .as_ref()
                    .map(|c| c.steps.len() as i64)
                    .unwrap_or(0)
                    + 1;
                let id = parse_id(&token.values).unwrap_or(fallback);
                current_step = Some(Step {
                    step: id,
                    dp: Vec::new(),
                });
            }
            "dp" => {
                // A sample before any `st` implies step 1. No cycle is
                // implied: without an owning cycle the step is dropped
                // at flush time, samples included.
                let step = current_step.get_or_insert_with(|| Step {
                    step: 1,
                    dp: Vec::new(),
                });
                if token.values.len() >= 3
                    && let (Some(time), Some(voltage), Some(current)) = (
                        parse_finite(&token.values[0]),
                        parse_finite(&token.values[1]),
                        parse_finite(&token.values[2]),
                    )
                {
                    // Value 4 (index 3) is reserved by the log format.
                    // Value 5, when finite, is the instrument-reported
                    // cumulative charge.
                    let charge = token.values.get(4).and_then(|v| parse_finite(v));
                    step.dp.push(DataPoint {
                        time,
                        voltage,
                        current,
                        charge,
                    });
                }
            }
            "de" => {
                flush_step(&mut current_cycle, &mut current_step);
            }
            _ => {}
        }
    }

    // A stream ending mid-step still keeps that step's samples.
    flush_step(&mut current_cycle, &mut current_step);
    if let Some(cycle) = current_cycle.take() {
        cycles.push(cycle);
    }

    ParsedResult { cycles }
}

/// Append the pending step to the current cycle. The pending step is
/// always cleared; without a current cycle it is silently dropped.
fn flush_step(current_cycle: &mut Option<Cycle>, current_step: &mut Option<Step>) {
    let step = current_step.take();
    if let (Some(cycle), Some(step)) = (current_cycle.as_mut(), step) {
        cycle.steps.push(step);
    }
}

fn parse_id(values: &[String]) -> Option<i64> {
    values.first()?.trim().parse().ok()
}

fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

use std::io;

use celltrace_types::{Cycle, ParsedResult};

use crate::charge::calculate_charge;

/// Serialize cycles to pretty JSON in the `ParsedResult` shape.
pub fn export_json(cycles: &[Cycle]) -> serde_json::Result<String> {
    let result = ParsedResult {
        cycles: cycles.to_vec(),
    };
    serde_json::to_string_pretty(&result)
}

/// Write one CSV row per datapoint, enriched with the computed step
/// charge and the cycle's summed step charges. The instrument-reported
/// `charge` column is left empty where the sample carried none.
pub fn export_csv<W: io::Write>(cycles: &[Cycle], writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "cycle",
        "step",
        "time",
        "voltage",
        "current",
        "charge",
        "step_charge",
        "cycle_charge",
    ])?;

    for cycle in cycles {
        let cycle_charge: f64 = cycle.steps.iter().map(|s| calculate_charge(&s.dp)).sum();
        for step in &cycle.steps {
            let step_charge = calculate_charge(&step.dp);
            for dp in &step.dp {
                out.write_record([
                    cycle.cycle.to_string(),
                    step.step.to_string(),
                    dp.time.to_string(),
                    dp.voltage.to_string(),
                    dp.current.to_string(),
                    dp.charge.map(|c| c.to_string()).unwrap_or_default(),
                    step_charge.to_string(),
                    cycle_charge.to_string(),
                ])?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

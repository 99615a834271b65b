use serde::{Deserialize, Serialize};

/// One keyed record extracted from a cycler log.
///
/// Tokens are the shared vocabulary between the format-specific
/// extractors and the assembler: a key (e.g. `cy`, `st`, `dp`, `de`)
/// followed by the raw string values that accompanied it. Extractors
/// never interpret values; that is the assembler's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub key: String,
    pub values: Vec<String>,
}

impl Token {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// Single timestamped instrument sample.
///
/// `time` is in seconds. `charge` is the cumulative charge the
/// instrument itself reported for this sample, when present; absence
/// is `None`, never `0.0` — a real zero charge is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,
    pub voltage: f64,
    pub current: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,
}

/// Single phase within a cycle (e.g. constant-current charge, rest,
/// discharge), holding its samples in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step: i64,
    pub dp: Vec<DataPoint>,
}

/// One full charge/discharge repetition, composed of ordered steps.
///
/// Before normalization the same cycle id may appear on several Cycle
/// records (fragments emitted as disjoint token blocks); only
/// `normalize_cycles` output guarantees unique, ascending ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub cycle: i64,
    pub steps: Vec<Step>,
}

/// Root artifact produced by the assembler.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedResult {
    pub cycles: Vec<Cycle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_charge_is_omitted_from_json() {
        let point = DataPoint {
            time: 0.0,
            voltage: 3.7,
            current: 0.5,
            charge: None,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(!json.contains("charge"));
    }

    #[test]
    fn present_charge_round_trips() {
        let point = DataPoint {
            time: 1.0,
            voltage: 3.7,
            current: 0.5,
            charge: Some(0.0),
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: DataPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back.charge, Some(0.0));
    }
}

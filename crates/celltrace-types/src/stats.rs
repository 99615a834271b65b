use serde::{Deserialize, Serialize};

/// Scalar aggregates over one cycle.
///
/// Optional fields are `None` when the value is genuinely not
/// applicable (zero charge input, or a step whose energy could not be
/// computed), never a sentinel zero — a real `0.0` efficiency would
/// otherwise be indistinguishable from "unknown".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CycleStats {
    pub total_steps: usize,
    pub total_points: usize,

    /// Net charge over the whole cycle (signed; negative means net discharge).
    pub total_charge: f64,
    /// Sum of non-negative step charges.
    pub charge_input: f64,
    /// Sum of absolute values of negative step charges.
    pub discharge_output: f64,
    /// Coulombic efficiency: `discharge_output / charge_input` when
    /// `charge_input > 0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,

    /// True only if energy was computable for every step and at least
    /// one step contributed a value.
    pub has_energy_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_input: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_output: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_efficiency: Option<f64>,
}

use serde::{Deserialize, Serialize};

/// One sweep cell.  Field names on disk are the CSV column headers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRecord {
    /// Metres.
    #[serde(rename = "LegLength")]
    pub leg_length: f64,
    /// Hz.
    #[serde(rename = "Frequency")]
    pub frequency:  f64,
    /// m/s.
    #[serde(rename = "Speed")]
    pub speed:      f64,
    /// Cost of transport, dimensionless.  `inf` when the robot went nowhere.
    #[serde(rename = "CoT")]
    pub cot:        f64,
    /// Metres.
    #[serde(rename = "Distance")]
    pub distance:   f64,
}

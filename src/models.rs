use serde::{Deserialize, Serialize};

/// One row of fleet telemetry and ownership metadata.
///
/// Every field is a string on the wire: speed, acceleration, risk and year
/// are intended-numeric but untyped, and plate is an implied (unenforced)
/// unique key. Missing fields deserialize to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    pub plate: String,
    pub gps: String,
    pub speed: String,
    pub acceleration: String,
    pub risk: String,
    pub name: String,
    pub model: String,
    pub year: String,
}

/// The hardcoded dataset a fresh server starts with.
pub fn fixture() -> Vec<VehicleRecord> {
    vec![VehicleRecord {
        plate: "ABC-123".to_string(),
        gps: "123.456".to_string(),
        speed: "123".to_string(),
        acceleration: "123".to_string(),
        risk: "123".to_string(),
        name: "John Doe".to_string(),
        model: "Tesla".to_string(),
        year: "2021".to_string(),
    }]
}

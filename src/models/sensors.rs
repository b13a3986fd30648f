//! Sensor telemetry payloads. Transport-only - readings are acknowledged and
//! logged, not persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub address: String,
    pub date: String,
    pub status: String,
    pub battery: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorData {
    pub sensors: Vec<Sensor>,
}

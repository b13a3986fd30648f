use axum::{response::IntoResponse, Json};

use crate::models::sensors::SensorData;

/// Acknowledges a sensor telemetry batch. Readings are logged, not persisted.
pub async fn receive_data(Json(sensor_data): Json<SensorData>) -> impl IntoResponse {
    tracing::info!("received {} sensor reading(s)", sensor_data.sensors.len());
    Json(serde_json::json!({ "message": sensor_data }))
}

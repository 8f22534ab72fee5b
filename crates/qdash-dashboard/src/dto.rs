//! Data Transfer Objects for the dashboard API.

use qdash_sched::{DEFAULT_BACKEND, DEFAULT_QUBITS, DEFAULT_SHOTS};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Job DTOs
// ============================================================================

/// Body of `POST /jobs/new`.
///
/// Every field is optional and loosely typed: clients send numbers, floats,
/// and numeric strings. [`CreateJobRequest::resolve`] turns whatever arrived
/// into valid job parameters, falling back to the defaults for anything
/// missing, malformed, or non-positive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateJobRequest {
    pub backend: Option<Value>,
    pub qubits: Option<Value>,
    pub shots: Option<Value>,
}

/// Job parameters after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParams {
    pub backend: String,
    pub qubits: u32,
    pub shots: u32,
}

impl CreateJobRequest {
    pub fn resolve(&self) -> JobParams {
        let backend = match &self.backend {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => DEFAULT_BACKEND.to_string(),
        };

        JobParams {
            backend,
            qubits: coerce_positive(self.qubits.as_ref()).unwrap_or(DEFAULT_QUBITS),
            shots: coerce_positive(self.shots.as_ref()).unwrap_or(DEFAULT_SHOTS),
        }
    }
}

/// Read a positive integer out of a JSON number or numeric string.
/// Fractions are truncated.
fn coerce_positive(value: Option<&Value>) -> Option<u32> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !n.is_finite() || n < 1.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n.trunc() as u32)
}

/// Plain acknowledgement, e.g. for a cancelled job.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response of `DELETE /jobs/delete/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

// ============================================================================
// Service DTOs
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

// ─── Responder Types ──────────────────────────────────────────────────────────

pub const PAYLOAD_MESSAGE: &str = "This is a test response to generate inbound traffic";
pub const FILLER_CHAR: char = 'x';
pub const FILLER_LEN: usize = 1000;

/// Body served for every GET request. Built fresh per request so the
/// timestamp reflects response time, then discarded after serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPayload {
    pub message: String,
    pub timestamp: f64,
    pub data: String,
}

impl TrafficPayload {
    pub fn new() -> Self {
        Self {
            message: PAYLOAD_MESSAGE.to_string(),
            timestamp: now_secs(),
            data: FILLER_CHAR.to_string().repeat(FILLER_LEN),
        }
    }
}

impl Default for TrafficPayload {
    fn default() -> Self {
        Self::new()
    }
}

fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs_f64())
        .unwrap_or_default()
}

// ─── Driver Types ─────────────────────────────────────────────────────────────

/// Outcome of one driver iteration. Only used for the console line and for
/// assertions in tests; never persisted.
#[derive(Debug, Clone)]
pub struct ProbeSample {
    pub iteration: u32,
    pub status_code: Option<u16>,
    pub bytes_in: Option<u64>,
    pub error_message: Option<String>,
}

impl ProbeSample {
    pub fn success(iteration: u32, status_code: u16, bytes_in: u64) -> Self {
        Self {
            iteration,
            status_code: Some(status_code),
            bytes_in: Some(bytes_in),
            error_message: None,
        }
    }

    pub fn failure(iteration: u32, message: impl Into<String>) -> Self {
        Self {
            iteration,
            status_code: None,
            bytes_in: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_message.is_none()
    }

    pub fn console_line(&self) -> String {
        match (self.status_code, self.bytes_in) {
            (Some(status), Some(bytes)) => {
                format!("request {}: status {status}, {bytes} bytes", self.iteration)
            }
            _ => format!(
                "request {} failed: {}",
                self.iteration,
                self.error_message.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_with_expected_keys() {
        let body = serde_json::to_string(&TrafficPayload::new()).expect("serialize payload");

        let value: serde_json::Value = serde_json::from_str(&body).expect("parse payload");
        let object = value.as_object().expect("payload is an object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["data", "message", "timestamp"]);

        // Field order on the wire follows the struct declaration.
        assert!(body.starts_with("{\"message\":"));
    }

    #[test]
    fn payload_data_is_exactly_the_filler() {
        let payload = TrafficPayload::new();
        assert_eq!(payload.data.len(), FILLER_LEN);
        assert!(payload.data.chars().all(|c| c == FILLER_CHAR));
    }

    #[test]
    fn payload_round_trips_through_json() {
        let body = serde_json::to_string(&TrafficPayload::new()).expect("serialize payload");
        let parsed: TrafficPayload = serde_json::from_str(&body).expect("deserialize payload");

        assert_eq!(parsed.message, PAYLOAD_MESSAGE);
        assert_eq!(parsed.data, FILLER_CHAR.to_string().repeat(FILLER_LEN));
    }

    #[test]
    fn payload_timestamps_are_non_decreasing() {
        let first = TrafficPayload::new();
        let second = TrafficPayload::new();
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn console_line_reports_status_and_size() {
        let sample = ProbeSample::success(3, 200, 1085);
        assert_eq!(sample.console_line(), "request 3: status 200, 1085 bytes");
        assert!(sample.is_success());
    }

    #[test]
    fn console_line_reports_errors() {
        let sample = ProbeSample::failure(7, "Request failed: connection refused");
        assert_eq!(
            sample.console_line(),
            "request 7 failed: Request failed: connection refused"
        );
        assert!(!sample.is_success());
    }
}

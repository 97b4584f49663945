//! Health-state encoding for status objects.
//!
//! OpenSearch Dashboards reports health as a `state` color string on
//! both the overall status object and every granular status entry.
//! The numeric codes match the ones used by the OpenSearch exporter so
//! that dashboards and alerts can treat both sources the same way.

use serde_json::{Map, Value};

/// Health of the cluster or of a single plugin/core component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    /// `"green"` — fully operational.
    Green,
    /// `"yellow"` — degraded.
    Yellow,
    /// `"red"` — failing.
    Red,
    /// Missing `state` key or an unrecognized color.
    Unknown,
}

impl HealthState {
    /// Read the `state` key of a status object.
    ///
    /// Only an exact string match counts: a non-string `state` value is
    /// treated the same as a missing one.
    pub fn of(status: &Map<String, Value>) -> Self {
        match status.get("state").and_then(Value::as_str) {
            Some("green") => Self::Green,
            Some("yellow") => Self::Yellow,
            Some("red") => Self::Red,
            _ => Self::Unknown,
        }
    }

    /// Numeric gauge value for this state.
    pub const fn code(self) -> f64 {
        match self {
            Self::Green => 0.0,
            Self::Yellow => 1.0,
            Self::Red => 2.0,
            Self::Unknown => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_of(value: Value) -> HealthState {
        match value {
            Value::Object(map) => HealthState::of(&map),
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(state_of(json!({"state": "green"})).code(), 0.0);
        assert_eq!(state_of(json!({"state": "yellow"})).code(), 1.0);
        assert_eq!(state_of(json!({"state": "red"})).code(), 2.0);
        assert_eq!(state_of(json!({"state": "foo"})).code(), -1.0);
    }

    #[test]
    fn test_missing_or_non_string_state_is_unknown() {
        assert_eq!(state_of(json!({})), HealthState::Unknown);
        assert_eq!(state_of(json!({"title": "Green"})), HealthState::Unknown);
        assert_eq!(state_of(json!({"state": 0})), HealthState::Unknown);
        assert_eq!(state_of(json!({"state": "GREEN"})), HealthState::Unknown);
    }
}

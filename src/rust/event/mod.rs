//! Inbound event model for the control panel.
//!
//! The host delivers loosely-shaped notifications (JS objects on the wire);
//! this module gives them a typed form and a JSON decoding path.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A port value as the host reports it: numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for PortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortValue::Number(n) => write!(f, "{}", n),
            PortValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PortValue {
    fn from(n: f64) -> Self {
        PortValue::Number(n)
    }
}

impl From<&str> for PortValue {
    fn from(s: &str) -> Self {
        PortValue::Text(s.to_string())
    }
}

/// Snapshot of one port inside a `start` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortState {
    pub symbol: String,
    pub value: PortValue,
}

impl PortState {
    pub fn new(symbol: impl Into<String>, value: impl Into<PortValue>) -> Self {
        Self {
            symbol: symbol.into(),
            value: value.into(),
        }
    }
}

/// Notification delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Panel initialization: the current value of every port.
    Start { ports: Vec<PortState> },
    /// Live update of a single port.
    Change { symbol: String, value: PortValue },
    /// Any event type this panel does not recognize.
    Unknown,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("malformed event payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} event is missing its `{field}` field")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

/// Wire shape of a host notification before classification.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    ports: Option<Vec<PortState>>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    value: Option<PortValue>,
}

impl ControlEvent {
    /// Decode a host notification from its JSON form.
    ///
    /// Unrecognized `type` strings decode to [`ControlEvent::Unknown`] so the
    /// dispatch path can drop them, matching host semantics. A recognized
    /// type missing its payload is an error.
    pub fn from_json(raw: &str) -> Result<Self, EventError> {
        let raw: RawEvent = serde_json::from_str(raw)?;
        match raw.kind.as_str() {
            "start" => {
                let ports = raw.ports.ok_or(EventError::MissingField {
                    kind: "start",
                    field: "ports",
                })?;
                Ok(ControlEvent::Start { ports })
            }
            "change" => {
                let symbol = raw.symbol.ok_or(EventError::MissingField {
                    kind: "change",
                    field: "symbol",
                })?;
                let value = raw.value.ok_or(EventError::MissingField {
                    kind: "change",
                    field: "value",
                })?;
                Ok(ControlEvent::Change { symbol, value })
            }
            _ => Ok(ControlEvent::Unknown),
        }
    }
}

#[cfg(test)]
#[path = "test_event.rs"]
mod tests;

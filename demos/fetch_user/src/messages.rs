use async_actions::Action;
use serde::Serialize;
use serde_json::Value;

/// An action together with the payload a caller attached to it.
#[derive(Debug, Serialize)]
pub struct Dispatched {
    #[serde(flatten)]
    pub action: Action,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl Dispatched {
    pub const fn new(action: Action, payload: Value) -> Self {
        Self { action, payload }
    }
}

// src/check/types.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated form input. Also the outbound JSON payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckInput {
    pub prompt: String,
    pub brand: String,
}

/// Decoded response body. Every field is optional and loosely typed; the
/// server may send a number for `position` or an object for `error`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub brand: Option<Value>,
    #[serde(default)]
    pub mentioned: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub raw_text: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default, rename = "_error")]
    pub internal_error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default, rename = "providerDetail")]
    pub provider_detail: Option<Value>,
}

impl CheckResponse {
    /// Any JSON document is accepted; non-objects carry no fields.
    pub fn from_value(v: Value) -> Self {
        match v {
            Value::Object(_) => serde_json::from_value(v).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn prompt(&self) -> Option<String> { text(&self.prompt) }
    pub fn brand(&self) -> Option<String> { text(&self.brand) }
    pub fn mentioned(&self) -> Option<String> { text(&self.mentioned) }
    pub fn position(&self) -> Option<String> { text(&self.position) }
    pub fn raw_text(&self) -> Option<String> { text(&self.raw_text) }
    pub fn error(&self) -> Option<String> { text(&self.error) }
    pub fn internal_error(&self) -> Option<String> { text(&self.internal_error) }
    pub fn message(&self) -> Option<String> { text(&self.message) }

    /// Payload-level error indicator, under either field name.
    pub fn has_error(&self) -> bool {
        present(&self.error) || present(&self.internal_error)
    }

    /// `providerDetail` pretty-printed with two-space indentation.
    pub fn provider_detail_pretty(&self) -> Option<String> {
        self.provider_detail
            .as_ref()
            .filter(|v| truthy(v))
            .and_then(|v| serde_json::to_string_pretty(v).ok())
    }
}

/// What one transport attempt produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Any HTTP status whose body decoded as JSON.
    Completed { status: u16, reason: String, body: CheckResponse },
    /// Transport error, or a body that is not JSON.
    Failed { message: String },
}

impl Outcome {
    /// Decode a response body. A decode error takes the failure path.
    pub fn from_body(status: u16, reason: impl Into<String>, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(v) => Outcome::Completed {
                status,
                reason: reason.into(),
                body: CheckResponse::from_value(v),
            },
            Err(e) => Outcome::failed(e.to_string()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Outcome::Failed { message: message.into() }
    }
}

#[inline]
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/* ---------------- Loose field handling ---------------- */

/// null, false, 0 and "" count as absent.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present(field: &Option<Value>) -> bool {
    field.as_ref().is_some_and(truthy)
}

fn text(field: &Option<Value>) -> Option<String> {
    field.as_ref().filter(|v| truthy(v)).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

use std::fmt;

use crate::error::Error;

/// An error value as surfaced by a wallet, JSON-RPC provider or contract call.
///
/// Producers agree on no schema, so every field is read through an accessor that
/// treats absent, `null` and wrongly typed values alike as "not present".
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct RawError(serde_json::Value);

/// A usable error code lifted out of a [`RawError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeValue {
    /// Symbolic code such as ethers' `"ACTION_REJECTED"`.
    Text(String),
    /// Numeric code such as EIP-1193 `4001` or JSON-RPC `-32000`.
    Number(i64),
}

impl CodeValue {
    /// True for a symbolic code equal to `expected`.
    pub fn is_text(&self, expected: &str) -> bool {
        matches!(self, Self::Text(s) if s == expected)
    }

    /// True for a numeric code equal to `expected`; `"4001"` as text never matches.
    pub fn is_number(&self, expected: i64) -> bool {
        matches!(self, Self::Number(n) if *n == expected)
    }
}

impl RawError {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Parse a raw error from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(Self(serde_json::from_str(json)?))
    }

    /// An error carrying no fields at all.
    pub fn empty() -> Self {
        Self(serde_json::Value::Null)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// First usable code from `code`, then `error.code`, then `data.code`.
    pub fn code(&self) -> Option<CodeValue> {
        usable_code(self.0.get("code"))
            .or_else(|| usable_code(self.nested("error", "code")))
            .or_else(|| usable_code(self.nested("data", "code")))
    }

    pub fn message(&self) -> Option<&str> {
        non_empty_str(self.0.get("message"))
    }

    /// Contract revert reason, as attached by ethers-style clients.
    pub fn reason(&self) -> Option<&str> {
        non_empty_str(self.0.get("reason"))
    }

    fn nested(&self, outer: &str, inner: &str) -> Option<&serde_json::Value> {
        self.0.get(outer)?.get(inner)
    }
}

impl From<serde_json::Value> for RawError {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn non_empty_str(value: Option<&serde_json::Value>) -> Option<&str> {
    value.and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}

/// Empty strings and zero fall through, same as the falsy checks the
/// producing clients perform.
fn usable_code(value: Option<&serde_json::Value>) -> Option<CodeValue> {
    match value? {
        serde_json::Value::String(s) if !s.is_empty() => Some(CodeValue::Text(s.clone())),
        serde_json::Value::Number(n) => {
            let int = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                    .map(|f| f as i64)
            })?;
            (int != 0).then_some(CodeValue::Number(int))
        }
        _ => None,
    }
}

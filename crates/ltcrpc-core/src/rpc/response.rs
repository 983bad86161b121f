//! Decoded litecoind response.
//!
//! Every HTTP reply is wrapped in an [`RpcResponse`] right after the
//! transport returns it. The wrapper never fails to build: a body that is
//! not a JSON object decodes to an empty object, so `has_error()` is false
//! and there is no result.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{DaemonError, RpcError};

use super::protocol::parse_jsonrpc_error;

#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    status: StatusCode,
    body: Map<String, Value>,
}

impl RpcResponse {
    pub fn new(status: StatusCode, raw: &str) -> Self {
        let body = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self { status, body }
    }

    pub(super) fn from_value(status: StatusCode, body: Value) -> Self {
        let body = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The decoded envelope (`result`, `error`, `id`).
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn has_error(&self) -> bool {
        self.body.get("error").is_some_and(|err| !err.is_null())
    }

    pub fn error(&self) -> Option<DaemonError> {
        self.body
            .get("error")
            .filter(|err| !err.is_null())
            .map(parse_jsonrpc_error)
    }

    pub fn result(&self) -> Option<&Value> {
        self.body.get("result")
    }

    pub fn into_result(mut self) -> Option<Value> {
        self.body.remove("result")
    }

    /// Deserialize the `result` field into `T`.
    pub fn deserialize_result<T: DeserializeOwned>(&self) -> Result<T, RpcError> {
        let result = self
            .result()
            .ok_or_else(|| RpcError::transport("response carries no result", None))?;
        serde_json::from_value(result.clone()).map_err(|e| {
            RpcError::transport(format!("unexpected result shape: {e}"), None)
        })
    }

    /// Look up a dotted path inside the result, e.g. `"softforks.taproot.active"`
    /// or `"0.txid"`. Numeric segments index arrays.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = self.result()?;
        if path.is_empty() {
            return Some(current);
        }
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// True if `path` resolves to a value, even an explicit `null`.
    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// True if `path` resolves to a non-null value.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some_and(|value| !value.is_null())
    }

    /// True if the result array or object holds `needle` as an element or
    /// value. A scalar result is compared directly.
    pub fn contains(&self, needle: &Value) -> bool {
        match self.result() {
            Some(Value::Array(items)) => items.contains(needle),
            Some(Value::Object(map)) => map.values().any(|value| value == needle),
            Some(scalar) => scalar == needle,
            None => false,
        }
    }

    /// Object keys of the result, or array indices rendered as strings.
    pub fn keys(&self) -> Vec<String> {
        match self.result() {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn values(&self) -> Vec<&Value> {
        match self.result() {
            Some(Value::Object(map)) => map.values().collect(),
            Some(Value::Array(items)) => items.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Number of entries in an array or object result; a present scalar
    /// counts as one, a missing or null result as zero.
    pub fn count(&self) -> usize {
        match self.result() {
            Some(Value::Object(map)) => map.len(),
            Some(Value::Array(items)) => items.len(),
            Some(Value::Null) | None => 0,
            Some(_) => 1,
        }
    }

    pub fn first(&self) -> Option<&Value> {
        self.values().first().copied()
    }

    pub fn last(&self) -> Option<&Value> {
        self.values().last().copied()
    }
}

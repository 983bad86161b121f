use serde_json::Value;

use crate::error::DaemonError;

/// Request body sent to litecoind. The daemon's dialect carries only these
/// three keys; no `jsonrpc` version tag.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub(super) struct JsonRpcRequest {
    pub(super) method: String,
    pub(super) params: Vec<Value>,
    pub(super) id: u64,
}

impl JsonRpcRequest {
    pub(super) fn new(method: &str, params: Vec<Value>, id: u64) -> Self {
        Self {
            method: method.to_lowercase(),
            params,
            id,
        }
    }
}

/// Parse a JSON-RPC error value into a [`DaemonError`].
///
/// The expected shape is `{"code": <int>, "message": <string>}`. Anything
/// else is still a node-reported failure, so it is kept with code `0` and
/// the raw JSON as the message.
pub(super) fn parse_jsonrpc_error(err: &Value) -> DaemonError {
    serde_json::from_value::<DaemonError>(err.clone()).unwrap_or_else(|_| DaemonError {
        code: 0,
        message: match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    })
}

/// Conversion into an ordered parameter list.
///
/// A JSON array is used as-is, `null` and `()` mean no parameters, and any
/// other single value becomes a one-element list.
pub trait IntoParams {
    fn into_params(self) -> Vec<Value>;
}

impl IntoParams for Vec<Value> {
    fn into_params(self) -> Vec<Value> {
        self
    }
}

impl<const N: usize> IntoParams for [Value; N] {
    fn into_params(self) -> Vec<Value> {
        self.into()
    }
}

impl IntoParams for () {
    fn into_params(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoParams for Value {
    fn into_params(self) -> Vec<Value> {
        match self {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            scalar => vec![scalar],
        }
    }
}

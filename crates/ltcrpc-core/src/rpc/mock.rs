use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::error::{DaemonError, RpcError};

use super::response::RpcResponse;
use super::LitecoinRpc;

/// A mock litecoind backend for testing. Returns canned results or node
/// errors per method, populated via the builder pattern, and records every
/// call it receives.
pub struct MockRpc {
    replies: HashMap<String, Result<Value, DaemonError>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            replies: HashMap::new(),
        }
    }

    /// Parameter lists of every recorded call to `method`, in call order.
    pub fn calls_for(&self, method: &str) -> Vec<Vec<Value>> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, params)| params.clone())
            .collect()
    }
}

pub struct MockRpcBuilder {
    replies: HashMap<String, Result<Value, DaemonError>>,
}

impl MockRpcBuilder {
    pub fn with_result(mut self, method: &str, result: Value) -> Self {
        self.replies.insert(method.to_owned(), Ok(result));
        self
    }

    pub fn with_error(mut self, method: &str, error: DaemonError) -> Self {
        self.replies.insert(method.to_owned(), Err(error));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            replies: self.replies,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LitecoinRpc for MockRpc {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<RpcResponse, RpcError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));

        match self.replies.get(method) {
            Some(Ok(result)) => Ok(RpcResponse::from_value(
                StatusCode::OK,
                json!({"result": result, "error": null, "id": 0}),
            )),
            Some(Err(error)) => Err(RpcError::Daemon(error.clone())),
            // Mirrors litecoind's reply for an unknown method.
            None => Err(RpcError::Daemon(DaemonError {
                code: -32601,
                message: "Method not found".to_owned(),
            })),
        }
    }
}

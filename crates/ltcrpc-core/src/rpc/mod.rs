//! litecoind RPC layer.
//!
//! [`RpcClient`] is the HTTP JSON-RPC implementation with generic blocking
//! ([`RpcClient::call`]) and async ([`RpcClient::call_async`]) entry points.
//! [`LitecoinRpc`] layers typed wrappers for common node methods on top of a
//! single `request` primitive, so any backend (including the test mock)
//! gets them for free.

mod client;
mod connection;
#[cfg(test)]
pub mod mock;
mod protocol;
mod response;
pub mod types;

pub use client::{Callbacks, RpcClient, DEFAULT_WALLET_PATH};
pub use connection::{ConnectionConfig, Scheme, TransportOptions, DEFAULT_HOST, DEFAULT_PORT};
pub use protocol::IntoParams;
pub use response::RpcResponse;
pub use types::{BlockchainInfo, NetworkInfo, Unspent, WalletInfo};

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::amount::{truncate_to_fixed, DEFAULT_PRECISION};
use crate::error::RpcError;

use types::NodeAmount;

/// Typed access to the litecoind methods this crate wraps.
///
/// Methods not listed here go through [`LitecoinRpc::request`] (or
/// [`RpcClient::call`]) by name.
#[async_trait]
pub trait LitecoinRpc: Send + Sync {
    /// Send `method` with positional `params` and return the decoded reply.
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<RpcResponse, RpcError>;

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, RpcError> {
        self.request("getblockchaininfo", Vec::new())
            .await?
            .deserialize_result()
    }

    async fn get_block_count(&self) -> Result<u64, RpcError> {
        self.request("getblockcount", Vec::new())
            .await?
            .deserialize_result()
    }

    async fn get_best_block_hash(&self) -> Result<String, RpcError> {
        self.request("getbestblockhash", Vec::new())
            .await?
            .deserialize_result()
    }

    async fn get_block_hash(&self, height: u64) -> Result<String, RpcError> {
        self.request("getblockhash", vec![json!(height)])
            .await?
            .deserialize_result()
    }

    async fn get_network_info(&self) -> Result<NetworkInfo, RpcError> {
        self.request("getnetworkinfo", Vec::new())
            .await?
            .deserialize_result()
    }

    async fn get_wallet_info(&self) -> Result<WalletInfo, RpcError> {
        self.request("getwalletinfo", Vec::new())
            .await?
            .deserialize_result()
    }

    /// Wallet balance, parsed without going through `f64`.
    async fn get_balance(&self) -> Result<Decimal, RpcError> {
        let NodeAmount(balance) = self
            .request("getbalance", Vec::new())
            .await?
            .deserialize_result()?;
        Ok(balance)
    }

    async fn get_new_address(&self, label: Option<&str>) -> Result<String, RpcError> {
        let params = match label {
            Some(label) => vec![json!(label)],
            None => Vec::new(),
        };
        self.request("getnewaddress", params)
            .await?
            .deserialize_result()
    }

    /// Send `amount` litecoin to `address` and return the txid.
    ///
    /// The amount is truncated to eight places and sent as a decimal string,
    /// which litecoind accepts wherever it takes an amount.
    async fn send_to_address(&self, address: &str, amount: Decimal) -> Result<String, RpcError> {
        let amount = truncate_to_fixed(amount, DEFAULT_PRECISION)
            .map_err(|e| RpcError::Config(format!("invalid send amount: {e}")))?;
        self.request("sendtoaddress", vec![json!(address), json!(amount)])
            .await?
            .deserialize_result()
    }

    async fn list_unspent(
        &self,
        min_conf: u32,
        max_conf: Option<u32>,
    ) -> Result<Vec<Unspent>, RpcError> {
        let mut params = vec![json!(min_conf)];
        if let Some(max_conf) = max_conf {
            params.push(json!(max_conf));
        }
        self.request("listunspent", params)
            .await?
            .deserialize_result()
    }

    /// Raw transaction as hex (`verbose = false`) or decoded JSON.
    async fn get_raw_transaction(&self, txid: &str, verbose: bool) -> Result<Value, RpcError> {
        let response = self
            .request("getrawtransaction", vec![json!(txid), json!(verbose)])
            .await?;
        response
            .into_result()
            .ok_or_else(|| RpcError::transport("response carries no result", None))
    }
}

//! Typed results for the wrapped litecoind methods.
//!
//! Only the fields callers commonly need are modelled; anything else is
//! still reachable through [`super::RpcResponse::get`].

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::amount::deserialize_amount;

/// A bare amount result, e.g. from `getbalance`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct NodeAmount(#[serde(deserialize_with = "deserialize_amount")] pub Decimal);

// ==============================================================================
// Chain
// ==============================================================================

/// Result of `getblockchaininfo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,
    pub pruned: bool,
}

/// Result of `getnetworkinfo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkInfo {
    pub version: u64,
    pub subversion: String,
    #[serde(rename = "protocolversion")]
    pub protocol_version: u64,
    pub connections: u32,
    #[serde(rename = "networkactive", default)]
    pub network_active: bool,
}

// ==============================================================================
// Wallet
// ==============================================================================

/// Result of `getwalletinfo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletInfo {
    #[serde(rename = "walletname")]
    pub wallet_name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub balance: Decimal,
    #[serde(deserialize_with = "deserialize_amount", default)]
    pub unconfirmed_balance: Decimal,
    #[serde(rename = "txcount")]
    pub tx_count: u64,
}

/// One entry of `listunspent`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Unspent {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Decimal,
    pub confirmations: u64,
    pub spendable: bool,
}

pub mod amount;
pub mod error;
pub mod rpc;

pub use error::{DaemonError, ErrorKind, RpcError};
pub use rpc::{Callbacks, ConnectionConfig, LitecoinRpc, RpcClient, RpcResponse, TransportOptions};

use serde::{Deserialize, Serialize};

/// JSON-RPC flavor spoken by a network endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsonRpcApi {
    Legacy,
    New,
}

/// Static descriptor of a supported network.
///
/// Immutable reference data: the app reads it, never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkInfo {
    pub id: String,
    pub name: String,
    /// Path of the network logo asset.
    pub logo: String,
    /// Display label of the RPC provider backing [`endpoint`](Self::endpoint).
    pub provider: String,
    /// WebSocket RPC endpoint the chain client connects to.
    pub endpoint: String,
    /// ss58 address prefix.
    pub prefix: u16,
    /// Token symbol.
    pub symbol: String,
    /// Number of decimals in the smallest indivisible token unit.
    pub decimals: u8,
    /// Block explorer base URL, if one exists for this network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscan_url: Option<String>,
    /// Testnet faucet URL, if one exists for this network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet_url: Option<String>,
    /// JSON-RPC flavor; `None` means the new API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_rpc_api: Option<JsonRpcApi>,
}

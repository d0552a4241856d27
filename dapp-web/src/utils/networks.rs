//! Supported networks
//!
//! Static reference table of the networks the dapp can target. The first
//! entry is the default.

use shared::{JsonRpcApi, NetworkInfo};

pub fn supported_networks() -> Vec<NetworkInfo> {
    vec![
        NetworkInfo {
            id: "pop_testnet".into(),
            name: "Pop Testnet".into(),
            logo: "/assets/networks/pop.svg".into(),
            provider: "Pop".into(),
            endpoint: "wss://rpc1.paseo.popnetwork.xyz".into(),
            prefix: 42,
            symbol: "PAS".into(),
            decimals: 10,
            subscan_url: None,
            faucet_url: Some("https://faucet.polkadot.io".into()),
            json_rpc_api: Some(JsonRpcApi::New),
        },
        NetworkInfo {
            id: "alephzero_testnet".into(),
            name: "Aleph Zero Testnet".into(),
            logo: "/assets/networks/alephzero.svg".into(),
            provider: "Dwellir".into(),
            endpoint: "wss://aleph-zero-testnet-rpc.dwellir.com".into(),
            prefix: 42,
            symbol: "TZERO".into(),
            decimals: 12,
            subscan_url: Some("https://alephzero-testnet.subscan.io".into()),
            faucet_url: Some("https://faucet.test.azero.dev".into()),
            json_rpc_api: Some(JsonRpcApi::Legacy),
        },
        NetworkInfo {
            id: "shibuya".into(),
            name: "Shibuya".into(),
            logo: "/assets/networks/shibuya.svg".into(),
            provider: "Astar".into(),
            endpoint: "wss://rpc.shibuya.astar.network".into(),
            prefix: 5,
            symbol: "SBY".into(),
            decimals: 18,
            subscan_url: Some("https://shibuya.subscan.io".into()),
            faucet_url: Some("https://portal.astar.network/shibuya-testnet/assets".into()),
            json_rpc_api: Some(JsonRpcApi::New),
        },
    ]
}

pub fn network_by_id(id: &str) -> Option<NetworkInfo> {
    supported_networks().into_iter().find(|n| n.id == id)
}

pub fn default_network() -> NetworkInfo {
    supported_networks()
        .into_iter()
        .next()
        .expect("the supported network table is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn network_ids_are_unique() {
        let networks = supported_networks();
        let ids: HashSet<_> = networks.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), networks.len());
    }

    #[test]
    fn endpoints_are_websocket_urls() {
        for network in supported_networks() {
            assert!(
                network.endpoint.starts_with("wss://"),
                "{} has a non-wss endpoint",
                network.id
            );
            assert!(network.decimals > 0);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(network_by_id("shibuya").map(|n| n.symbol), Some("SBY".into()));
        assert!(network_by_id("mainnet-of-nowhere").is_none());
        assert_eq!(default_network().id, "pop_testnet");
    }
}

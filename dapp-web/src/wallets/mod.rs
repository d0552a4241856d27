//! Wallet identities and readiness
//!
//! A wallet here is a browser-extension-backed signer the user can connect.
//! The static identities below are known at startup; whether an extension is
//! actually installed is discovered asynchronously and recorded per wallet in
//! the [`registry`].

use serde::{Deserialize, Serialize};

pub mod registry;

/// Static identity of a known wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletInfo {
    /// Key of the extension's entry in `window.injectedWeb3`.
    pub id: String,
    pub name: String,
    /// Path of the wallet logo asset.
    pub logo: String,
    /// Where to get the extension when it is not installed.
    pub install_url: String,
}

impl WalletInfo {
    pub fn new(id: &str, name: &str, logo: &str, install_url: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: logo.into(),
            install_url: install_url.into(),
        }
    }
}

/// Readiness of one wallet's browser extension.
///
/// An absent extension is a reported state, never an error that escapes:
/// probing a wallet that is not installed ends in `Unavailable` with the
/// reason recorded, so the UI (and logs) can show why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    /// Probe still in flight.
    Pending,
    /// Extension detected and its provider handle captured.
    Ready,
    /// Extension not detected (or probing failed), with the reason.
    Unavailable(String),
}

impl WalletStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, WalletStatus::Ready)
    }
}

/// The wallets this app knows how to connect.
pub fn known_wallets() -> Vec<WalletInfo> {
    vec![
        WalletInfo::new(
            "subwallet-js",
            "SubWallet",
            "/assets/wallets/subwallet.svg",
            "https://www.subwallet.app/download.html",
        ),
        WalletInfo::new(
            "talisman",
            "Talisman",
            "/assets/wallets/talisman.svg",
            "https://talisman.xyz/download",
        ),
        WalletInfo::new(
            "polkadot-js",
            "Polkadot{.js}",
            "/assets/wallets/polkadot-js.svg",
            "https://polkadot.js.org/extension/",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_wallet_ids_are_unique() {
        let wallets = known_wallets();
        for (i, a) in wallets.iter().enumerate() {
            for b in wallets.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}

//! Application constants

/// Label passed to the extension's enable request; wallets show it in their
/// authorization prompt.
pub const APP_NAME: &str = "InkBoard";

// Persisted session keys
pub const CONNECTED_WALLET_KEY: &str = "CONNECTED_WALLET";
pub const SELECTED_ACCOUNT_KEY: &str = "SELECTED_ACCOUNT";

/// Fallback faucet link for networks that do not provide one.
pub const DEFAULT_FAUCET_URL: &str =
    "https://github.com/use-ink/contracts-ui/blob/master/FAUCETS.md";

// Wallet extension probing
pub const WALLET_PROBE_INTERVAL_MS: u32 = 250;
pub const WALLET_READY_TIMEOUT_MS: u32 = 5_000;

// UI constants
pub const TOAST_AUTO_DISMISS_MS: u32 = 5_000;

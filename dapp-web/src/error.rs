//! # Centralized Error Handling
//!
//! One `thiserror`-derived error type covers every failure the dapp can
//! surface. Asynchronous failures in the connection flow are caught at the
//! session boundary and rendered as a single error toast; nothing is allowed
//! to cross into rendering code uncaught.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DappError>;

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DappError {
    /// The wallet extension was not detected within the readiness window.
    #[error("Wallet not available: {0}")]
    WalletUnavailable(String),

    /// The user or the extension refused the enable request.
    #[error("Wallet connection rejected: {0}")]
    EnableRejected(String),

    /// A wallet id that is not in the registry. This is a programmer or
    /// configuration error and is raised immediately.
    #[error("Unknown wallet id: {0}")]
    UnknownWalletId(String),

    /// Persisted session records could not be serialized or deserialized.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Chain client or contract interop failure.
    #[error("Client error: {0}")]
    Client(String),
}

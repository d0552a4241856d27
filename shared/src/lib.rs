//! # Shared Domain Types
//!
//! This library defines the domain types used by the dapp frontend: wallet
//! accounts, network descriptors, contract deployments and transaction
//! lifecycle statuses, plus the display formatting helpers that go with them.
//!
//! ## Structure
//!
//! - **[`dto`]**: serde-backed data types
//!   - **[`dto::account`]**: accounts published by wallet extensions
//!   - **[`dto::network`]**: static network descriptors
//!   - **[`dto::contract`]**: deployed contract references
//!   - **[`dto::tx`]**: transaction lifecycle statuses
//! - **[`utils`]**: formatting helpers
//!   - **[`utils::format_address`]**: ellipsize an ss58 address for display
//!   - **[`utils::format_balance`]**: render a raw balance in token units
//!
//! ## Wire Format
//!
//! Types that cross the extension/client interop boundary keep the injected
//! provider's camelCase key convention (e.g. `genesisHash`, `blockHash`) so
//! they deserialize directly from the JavaScript objects handed over by the
//! browser extension.

pub mod dto;
pub mod utils;

pub use dto::account::{InjectedAccount, KeypairType};
pub use dto::contract::{ContractDeployment, MetadataSource};
pub use dto::network::{JsonRpcApi, NetworkInfo};
pub use dto::tx::TxStatus;

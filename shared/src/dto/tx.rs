use serde::{Deserialize, Serialize};

/// Lifecycle status of a submitted transaction.
///
/// Mirrors the status objects streamed by the chain client's `signAndSend`
/// callback: a `type` discriminant plus a `value` payload where the status
/// carries one. `Finalized` is the terminal success state; `Invalid` and
/// `Drop` are terminal failures; everything else is in progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum TxStatus {
    Validated,
    Broadcasting,
    #[serde(rename_all = "camelCase")]
    BestChainBlockIncluded { block_hash: String },
    NoLongerInBestChain,
    #[serde(rename_all = "camelCase")]
    Finalized { block_hash: String },
    Invalid { error: String },
    Drop { error: String },
}

impl TxStatus {
    /// The wire discriminant, used as the small status line in toasts.
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Validated => "Validated",
            TxStatus::Broadcasting => "Broadcasting",
            TxStatus::BestChainBlockIncluded { .. } => "BestChainBlockIncluded",
            TxStatus::NoLongerInBestChain => "NoLongerInBestChain",
            TxStatus::Finalized { .. } => "Finalized",
            TxStatus::Invalid { .. } => "Invalid",
            TxStatus::Drop { .. } => "Drop",
        }
    }
}

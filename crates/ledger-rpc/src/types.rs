//! Typed response schemas for the node's RPC methods.

use ledger_codec::{Pubkey, RuntimeTransaction};
use serde::{Deserialize, Serialize};

/// Account state as reported by `read_account_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub owner: Pubkey,
    pub data: Vec<u8>,
    /// The anchoring UTXO, as `txid:vout`.
    pub utxo: String,
    pub is_executable: bool,
}

/// Processing state of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Processing,
    Processed,
}

/// A transaction as the node has processed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedTransaction {
    pub runtime_transaction: RuntimeTransaction,
    pub status: Status,
    pub bitcoin_txids: Vec<String>,
}

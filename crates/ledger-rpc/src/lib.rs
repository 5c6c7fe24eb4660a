//! Async JSON-RPC client for a ledger node.
//!
//! Pairs with `ledger-codec`: that crate produces signed transactions and
//! their wire shape, this one posts them over JSON-RPC 2.0 and decodes the
//! typed responses. The client owns its own correlation-id counter, never
//! retries, and surfaces node errors verbatim.

pub mod error;
pub mod rpc;
pub mod types;

// Re-export key public types for ergonomic imports.
pub use error::ClientError;
pub use rpc::RpcClient;
pub use types::{AccountInfo, ProcessedTransaction, Status};

//! Transaction codec and signing for a ledger node.
//!
//! This crate owns the client side of the encode → digest → sign pipeline:
//! callers build [`Instruction`]s into a [`Message`], the canonical encoder
//! turns it into an exact byte sequence, the two-stage SHA-256 digest of
//! those bytes is signed with one detached BIP-340 Schnorr signature per
//! signer, and the resulting [`Transaction`] converts into the JSON wire
//! shape ([`RuntimeTransaction`]) the node's RPC expects.
//!
//! Everything here is pure and synchronous; encoder and digest are safe to
//! call concurrently across independent messages. Network submission lives
//! in the companion `ledger-rpc` crate.

pub mod error;
pub mod instruction;
pub mod message;
pub mod pubkey;
pub mod sign;
pub mod signature;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use error::CodecError;
pub use instruction::{AccountMeta, Instruction};
pub use message::Message;
pub use pubkey::{Pubkey, PUBKEY_BYTES, SYSTEM_PROGRAM_ID};
pub use sign::{public_key_for, sign_message, verify_signature};
pub use signature::{Signature, SIGNATURE_BYTES};
pub use transaction::{
    sign_transaction, RuntimeTransaction, Transaction, TRANSACTION_VERSION,
};

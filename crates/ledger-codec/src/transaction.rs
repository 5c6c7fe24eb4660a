//! Signed transactions and their JSON wire shape.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::message::Message;
use crate::sign::sign_message;
use crate::signature::Signature;

/// Version tag of the transaction format accepted by the current node.
pub const TRANSACTION_VERSION: u32 = 0;

/// A message plus its positional signatures, ready for submission.
///
/// `signatures[i]` authorizes `message.signers[i]`; the lists always have
/// equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub signatures: Vec<Signature>,
    pub message: Message,
}

impl Transaction {
    /// Assemble a transaction, enforcing the positional signature
    /// invariant.
    pub fn new(
        version: u32,
        signatures: Vec<Signature>,
        message: Message,
    ) -> Result<Self, CodecError> {
        if signatures.len() != message.signers.len() {
            return Err(CodecError::SignatureCountMismatch {
                signers: message.signers.len(),
                signatures: signatures.len(),
            });
        }
        Ok(Self {
            version,
            signatures,
            message,
        })
    }

    /// The JSON-facing form of this transaction. Signatures cross the RPC
    /// boundary as raw byte arrays; pubkeys and instruction data already
    /// serialize that way.
    pub fn to_wire(&self) -> RuntimeTransaction {
        RuntimeTransaction {
            version: self.version,
            signatures: self.signatures.iter().map(Signature::to_vec).collect(),
            message: self.message.clone(),
        }
    }
}

/// Encode, digest, and sign `message` in one step.
///
/// `private_keys[i]` must correspond to `message.signers[i]`. The whole
/// pipeline fails atomically before anything is transmitted.
pub fn sign_transaction(
    message: Message,
    private_keys: &[[u8; 32]],
) -> Result<Transaction, CodecError> {
    let signatures = sign_message(&message, private_keys)?;
    Transaction::new(TRANSACTION_VERSION, signatures, message)
}

/// The wire shape consumed by the node's RPC: every binary field is an
/// array of byte values, `version` passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeTransaction {
    pub version: u32,
    pub signatures: Vec<Vec<u8>>,
    pub message: Message,
}

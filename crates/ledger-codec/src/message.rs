//! The signable unit and its canonical byte encoding.
//!
//! The encoding is the exact layout consumed by the remote deserializer and
//! by the digest step:
//!
//! ```text
//! Message:
//!   num_signers        u8
//!   signers            32 bytes * num_signers
//!   num_instructions   u8
//!   instructions[]:
//!     program_id       32 bytes
//!     num_accounts     u8
//!     accounts[]:      32-byte pubkey, is_signer u8 (0/1), is_writable u8 (0/1)
//!     data_len         u32 little-endian
//!     data             u8 * data_len
//! ```
//!
//! No padding, no alignment, no re-sorting of any list. List order is part
//! of the signed content, so callers own it.
//!
//! The digest that gets signed is two-stage: SHA-256 over the canonical
//! encoding, then SHA-256 over the lowercase hex *text* of the first hash
//! (64 ASCII bytes, not the raw 32). The remote verifier performs the same
//! two stages, so both must match exactly.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CodecError;
use crate::instruction::Instruction;
use crate::pubkey::{Pubkey, PUBKEY_BYTES};

/// Largest list length representable by the one-byte count fields.
const MAX_COUNT: usize = u8::MAX as usize;

/// The signable unit: ordered signers and ordered instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub signers: Vec<Pubkey>,
    pub instructions: Vec<Instruction>,
}

impl Message {
    /// Produce the canonical byte encoding.
    ///
    /// Pure and deterministic: encoding the same message twice yields
    /// identical bytes. All limits are checked before any byte is
    /// produced, so the encoding either fully succeeds or fails.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        if self.signers.len() > MAX_COUNT {
            return Err(CodecError::TooManySigners(self.signers.len()));
        }
        if self.instructions.len() > MAX_COUNT {
            return Err(CodecError::TooManyInstructions(self.instructions.len()));
        }
        for (index, instruction) in self.instructions.iter().enumerate() {
            if instruction.accounts.len() > MAX_COUNT {
                return Err(CodecError::TooManyAccounts {
                    index,
                    count: instruction.accounts.len(),
                });
            }
            if instruction.data.len() > u32::MAX as usize {
                return Err(CodecError::DataTooLong(instruction.data.len()));
            }
        }

        let mut buf = Vec::with_capacity(self.encoded_len());

        buf.push(self.signers.len() as u8);
        for signer in &self.signers {
            buf.extend_from_slice(signer.as_bytes());
        }

        buf.push(self.instructions.len() as u8);
        for instruction in &self.instructions {
            buf.extend_from_slice(instruction.program_id.as_bytes());

            buf.push(instruction.accounts.len() as u8);
            for meta in &instruction.accounts {
                buf.extend_from_slice(meta.pubkey.as_bytes());
                buf.push(meta.is_signer as u8);
                buf.push(meta.is_writable as u8);
            }

            buf.extend_from_slice(&(instruction.data.len() as u32).to_le_bytes());
            buf.extend_from_slice(&instruction.data);
        }

        Ok(buf)
    }

    /// The two-stage signing digest of this message.
    pub fn digest(&self) -> Result<[u8; 32], CodecError> {
        let encoded = self.encode()?;
        let first = Sha256::digest(&encoded);
        let second = Sha256::digest(hex::encode(first).as_bytes());
        Ok(second.into())
    }

    /// Exact size of the canonical encoding, for buffer pre-allocation.
    fn encoded_len(&self) -> usize {
        let mut len = 1 + self.signers.len() * PUBKEY_BYTES + 1;
        for instruction in &self.instructions {
            len += PUBKEY_BYTES + 1 + instruction.accounts.len() * (PUBKEY_BYTES + 2);
            len += 4 + instruction.data.len();
        }
        len
    }
}

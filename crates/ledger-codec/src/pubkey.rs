//! 32-byte account and program identifiers.
//!
//! A pubkey is the x-only secp256k1 public key of an account, or the
//! well-known id of a built-in program. Its canonical text form is
//! lowercase hex with no prefix; on the JSON-RPC wire it crosses as an
//! array of 32 byte values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Raw byte length of a public key.
pub const PUBKEY_BYTES: usize = 32;

/// The reserved system program id: 31 zero bytes followed by `0x01`.
/// Well-known target of account-creation and ownership-transfer
/// instructions.
pub const SYSTEM_PROGRAM_ID: [u8; PUBKEY_BYTES] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1,
];

/// A 32-byte public key identifying an account or program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl Pubkey {
    /// Build a pubkey from raw bytes. Fails unless exactly 32 bytes are
    /// supplied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let raw: [u8; PUBKEY_BYTES] = bytes
            .try_into()
            .map_err(|_| CodecError::InvalidLength(bytes.len()))?;
        Ok(Self(raw))
    }

    /// Decode a pubkey from its canonical hex form. Upper- and lowercase
    /// digits are both accepted on input.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = hex::decode(s)
            .map_err(|e| CodecError::InvalidEncoding(format!("hex decode failed: {e}")))?;
        let raw: [u8; PUBKEY_BYTES] = bytes.try_into().map_err(|v: Vec<u8>| {
            CodecError::InvalidEncoding(format!("expected {PUBKEY_BYTES} bytes, got {}", v.len()))
        })?;
        Ok(Self(raw))
    }

    /// Canonical lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The reserved system program id.
    pub const fn system_program() -> Self {
        Self(SYSTEM_PROGRAM_ID)
    }

    pub const fn as_bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(raw: [u8; PUBKEY_BYTES]) -> Self {
        Self(raw)
    }
}

impl TryFrom<Vec<u8>> for Pubkey {
    type Error = CodecError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl From<Pubkey> for Vec<u8> {
    fn from(pubkey: Pubkey) -> Self {
        pubkey.0.to_vec()
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

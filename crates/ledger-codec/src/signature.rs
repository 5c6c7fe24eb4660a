//! Detached 64-byte Schnorr signatures.

use std::fmt;

use crate::error::CodecError;

/// Raw byte length of a signature.
pub const SIGNATURE_BYTES: usize = 64;

/// A detached BIP-340 Schnorr signature. Canonical text form is lowercase
/// hex; on the JSON-RPC wire it crosses as an array of 64 byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_BYTES]);

impl Signature {
    /// Build a signature from raw bytes. Fails unless exactly 64 bytes are
    /// supplied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let raw: [u8; SIGNATURE_BYTES] = bytes.try_into().map_err(|_| {
            CodecError::InvalidSignature(format!(
                "expected {SIGNATURE_BYTES} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    /// Decode a signature from its canonical hex form.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = hex::decode(s)
            .map_err(|e| CodecError::InvalidSignature(format!("hex decode failed: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Canonical lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_BYTES] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<[u8; SIGNATURE_BYTES]> for Signature {
    fn from(raw: [u8; SIGNATURE_BYTES]) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

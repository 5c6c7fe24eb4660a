use thiserror::Error;

/// Codec and signing errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid public key encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("signer/signature count mismatch: {signers} signers, {signatures} signatures")]
    SignatureCountMismatch { signers: usize, signatures: usize },

    #[error("too many signers: {0} exceeds the one-byte count field")]
    TooManySigners(usize),

    #[error("too many instructions: {0} exceeds the one-byte count field")]
    TooManyInstructions(usize),

    #[error("too many accounts in instruction {index}: {count} exceeds the one-byte count field")]
    TooManyAccounts { index: usize, count: usize },

    #[error("instruction data too long: {0} bytes exceeds the u32 length prefix")]
    DataTooLong(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_length() {
        let err = CodecError::InvalidLength(31);
        assert_eq!(
            err.to_string(),
            "invalid public key length: expected 32 bytes, got 31"
        );
    }

    #[test]
    fn display_invalid_encoding() {
        let err = CodecError::InvalidEncoding("odd hex digit count".into());
        assert_eq!(
            err.to_string(),
            "invalid public key encoding: odd hex digit count"
        );
    }

    #[test]
    fn display_count_mismatch() {
        let err = CodecError::SignatureCountMismatch {
            signers: 2,
            signatures: 1,
        };
        assert_eq!(
            err.to_string(),
            "signer/signature count mismatch: 2 signers, 1 signatures"
        );
    }

    #[test]
    fn display_invalid_private_key() {
        let err = CodecError::InvalidPrivateKey("zero scalar".into());
        assert_eq!(err.to_string(), "invalid private key: zero scalar");
    }

    #[test]
    fn display_data_too_long() {
        let err = CodecError::DataTooLong(5_000_000_000);
        assert_eq!(
            err.to_string(),
            "instruction data too long: 5000000000 bytes exceeds the u32 length prefix"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(CodecError::TooManySigners(300));
        assert!(err.to_string().contains("300"));
    }
}

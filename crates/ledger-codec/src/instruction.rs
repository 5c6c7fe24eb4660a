//! Instructions and the accounts they touch.

use serde::{Deserialize, Serialize};

use crate::pubkey::Pubkey;

/// One account referenced by an instruction, with its access flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// A single operation directive: target program, involved accounts, opaque
/// payload.
///
/// The order of `accounts` is part of the signed content and is preserved
/// verbatim by the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_shape_mirrors_field_names() {
        let ix = Instruction {
            program_id: Pubkey::system_program(),
            accounts: vec![AccountMeta {
                pubkey: Pubkey::from_bytes(&[9; 32]).unwrap(),
                is_signer: true,
                is_writable: false,
            }],
            data: vec![1, 2, 3],
        };

        let value = serde_json::to_value(&ix).unwrap();
        assert_eq!(value["program_id"][31], 1);
        assert_eq!(value["accounts"][0]["pubkey"][0], 9);
        assert_eq!(value["accounts"][0]["is_signer"], true);
        assert_eq!(value["accounts"][0]["is_writable"], false);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn serde_roundtrip() {
        let ix = Instruction {
            program_id: Pubkey::from_bytes(&[0x42; 32]).unwrap(),
            accounts: vec![],
            data: vec![0xFF, 0x00],
        };
        let json = serde_json::to_string(&ix).unwrap();
        let back: Instruction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ix);
    }
}

//! Schnorr signing over message digests.
//!
//! Each signer independently produces one detached BIP-340 signature
//! (x-only public key convention) over the 32-byte message digest; there
//! is no aggregation. Signing uses no auxiliary randomness, so repeated
//! signing of the same digest with the same key is byte-identical.

use secp256k1::schnorr;
use secp256k1::{Keypair, Message as SecpMessage, Secp256k1, SecretKey, XOnlyPublicKey};
use zeroize::Zeroize;

use crate::error::CodecError;
use crate::message::Message;
use crate::pubkey::Pubkey;
use crate::signature::Signature;

/// Derive the x-only public key for a 32-byte private scalar.
pub fn public_key_for(private_key: &[u8; 32]) -> Result<Pubkey, CodecError> {
    let secp = Secp256k1::new();
    let keypair = keypair_from_scalar(&secp, private_key)?;
    let (xonly, _parity) = XOnlyPublicKey::from_keypair(&keypair);
    Ok(Pubkey::from(xonly.serialize()))
}

/// Sign `message` with each private key, in order.
///
/// The key list must match `message.signers` positionally: `signatures[i]`
/// is produced by `private_keys[i]` and authorizes `message.signers[i]`.
/// Fails atomically; no partial signature list is ever returned.
pub fn sign_message(
    message: &Message,
    private_keys: &[[u8; 32]],
) -> Result<Vec<Signature>, CodecError> {
    if private_keys.len() != message.signers.len() {
        return Err(CodecError::SignatureCountMismatch {
            signers: message.signers.len(),
            signatures: private_keys.len(),
        });
    }

    let digest = message.digest()?;
    let digest_message = SecpMessage::from_digest(digest);
    let secp = Secp256k1::new();

    let mut signatures = Vec::with_capacity(private_keys.len());
    for private_key in private_keys {
        let keypair = keypair_from_scalar(&secp, private_key)?;
        let signature = secp.sign_schnorr_no_aux_rand(&digest_message, &keypair);
        signatures.push(Signature::from(signature.serialize()));
    }
    Ok(signatures)
}

/// Verify one detached signature over a 32-byte digest.
pub fn verify_signature(
    signature: &Signature,
    digest: &[u8; 32],
    pubkey: &Pubkey,
) -> Result<bool, CodecError> {
    let secp = Secp256k1::new();
    let schnorr_sig = schnorr::Signature::from_slice(signature.as_bytes())
        .map_err(|e| CodecError::InvalidSignature(e.to_string()))?;
    let xonly = XOnlyPublicKey::from_slice(pubkey.as_bytes())
        .map_err(|e| CodecError::InvalidEncoding(format!("not an x-only public key: {e}")))?;
    let digest_message = SecpMessage::from_digest(*digest);
    Ok(secp
        .verify_schnorr(&schnorr_sig, &digest_message, &xonly)
        .is_ok())
}

/// Build a keypair from a raw scalar, wiping the stack copy afterwards.
fn keypair_from_scalar<C: secp256k1::Signing>(
    secp: &Secp256k1<C>,
    private_key: &[u8; 32],
) -> Result<Keypair, CodecError> {
    let mut scalar = *private_key;
    let secret = SecretKey::from_slice(&scalar)
        .map_err(|e| CodecError::InvalidPrivateKey(format!("not a valid curve scalar: {e}")));
    scalar.zeroize();
    Ok(Keypair::from_secret_key(secp, &secret?))
}

//! Message encoding: encrypt, then hide in the carrier's whitespace.
//!
//! The encode path is:
//! 1. Encrypt the message with the injected cipher and the recipient's key
//! 2. Distribute the ciphertext bytes across the carrier's whitespace regions
//! 3. Return the modified carrier text

use thiserror::Error;
use x25519_dalek::PublicKey;

use crate::crypto::{AsymmetricError, Cipher};
use crate::stego::embed;

/// Errors that can occur during encoding.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Encryption error: {0}")]
    Encryption(#[from] AsymmetricError),
}

/// Encrypts `message` for the recipient and splices the ciphertext into the
/// whitespace of `carrier`, returning the modified carrier text.
///
/// The visible (non-whitespace) content of the returned document is identical
/// to the input carrier; only whitespace is rewritten. The carrier must reach
/// the recipient with its whitespace bytes intact, or the payload is lost.
pub fn encode<C: Cipher>(
    cipher: &C,
    public_key: &PublicKey,
    message: &[u8],
    carrier: &str,
) -> Result<String, EncodeError> {
    let ciphertext = cipher.encrypt(public_key, message)?;
    Ok(embed(&ciphertext, carrier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{KeyPair, SealedBox};
    use crate::stego::PADDING_SYMBOL;

    #[test]
    fn test_encode_preserves_visible_text() {
        let carrier = "Nothing up my sleeve,\nnothing in my hat.";
        let kp = KeyPair::generate();

        let encoded = encode(&SealedBox, kp.public_key(), b"rabbit", carrier).unwrap();

        let visible = |s: &str| -> String {
            s.chars()
                .filter(|&c| !c.is_whitespace() && c != PADDING_SYMBOL)
                .collect()
        };
        assert_eq!(visible(&encoded), visible(carrier));
    }

    #[test]
    fn test_encode_output_grows_with_payload() {
        let carrier = "a b";
        let kp = KeyPair::generate();

        let encoded = encode(&SealedBox, kp.public_key(), b"some message", carrier).unwrap();

        // Sealed ciphertext is at least 60 bytes, each encoded as 4 symbols.
        assert!(encoded.chars().count() > carrier.len() + 60 * 4);
    }
}

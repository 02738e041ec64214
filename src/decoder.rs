//! Message decoding: scan the carrier's whitespace, then decrypt.
//!
//! The decode path is the exact inverse of encoding:
//! 1. Extract every fixed-width symbol run from the carrier, in order
//! 2. Decode the runs back to ciphertext bytes
//! 3. Decrypt with the injected cipher and the recipient's secret key

use thiserror::Error;
use x25519_dalek::StaticSecret;

use crate::crypto::{AsymmetricError, Cipher};
use crate::stego::{extract, ExtractError};

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Decryption error: {0}")]
    Decryption(#[from] AsymmetricError),
}

/// Recovers the ciphertext hidden in `carrier` and decrypts it with the
/// recipient's secret key, returning the original plaintext bytes.
pub fn decode<C: Cipher>(
    cipher: &C,
    secret_key: &StaticSecret,
    carrier: &str,
) -> Result<Vec<u8>, DecodeError> {
    let ciphertext = extract(carrier)?;
    Ok(cipher.decrypt(secret_key, &ciphertext)?)
}

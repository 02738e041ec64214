//! Sealed-box encryption, the default cipher capability.
//!
//! Hybrid scheme: an ephemeral X25519 key pair performs ECDH against the
//! recipient's public key, HKDF-SHA256 turns the shared secret into a
//! symmetric key, and ChaCha20Poly1305 seals the payload.
//!
//! Wire format: ephemeral public key (32) || nonce (12) || ciphertext.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use hkdf::Hkdf;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;
use x25519_dalek::{EphemeralSecret, PublicKey, SharedSecret, StaticSecret};

/// HKDF info string for key derivation.
const HKDF_INFO: &[u8] = b"SPACEHIDE-V1-SEALED-BOX";

/// Nonce size for ChaCha20Poly1305.
const NONCE_SIZE: usize = 12;

/// Ephemeral public key plus nonce.
const HEADER_SIZE: usize = 32 + NONCE_SIZE;

/// Poly1305 authentication tag size.
const TAG_SIZE: usize = 16;

/// Errors that can occur during asymmetric encryption operations.
#[derive(Error, Debug)]
pub enum AsymmetricError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Invalid ciphertext: too short")]
    CiphertextTooShort,

    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

/// Encrypts `plaintext` so only the holder of the secret key matching
/// `recipient` can read it.
pub fn seal(plaintext: &[u8], recipient: &PublicKey) -> Result<Vec<u8>, AsymmetricError> {
    let ephemeral = EphemeralSecret::random_from_rng(OsRng);
    let ephemeral_public = PublicKey::from(&ephemeral);

    let shared = ephemeral.diffie_hellman(recipient);
    let key = derive_key(&shared)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let cipher = ChaCha20Poly1305::new_from_slice(&key)
        .map_err(|e| AsymmetricError::EncryptionFailed(e.to_string()))?;
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| AsymmetricError::EncryptionFailed(e.to_string()))?;

    let mut out = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    out.extend_from_slice(ephemeral_public.as_bytes());
    out.extend_from_slice(&nonce_bytes);
    out.extend(ciphertext);

    Ok(out)
}

/// Decrypts a sealed payload with the recipient's secret key.
pub fn open(sealed: &[u8], secret: &StaticSecret) -> Result<Vec<u8>, AsymmetricError> {
    if sealed.len() < HEADER_SIZE + TAG_SIZE {
        return Err(AsymmetricError::CiphertextTooShort);
    }

    let ephemeral_public_bytes: [u8; 32] = sealed[..32]
        .try_into()
        .map_err(|_| AsymmetricError::CiphertextTooShort)?;
    let ephemeral_public = PublicKey::from(ephemeral_public_bytes);

    let shared = secret.diffie_hellman(&ephemeral_public);
    let key = derive_key(&shared)?;

    let cipher = ChaCha20Poly1305::new_from_slice(&key)
        .map_err(|e| AsymmetricError::DecryptionFailed(e.to_string()))?;
    let nonce = Nonce::from_slice(&sealed[32..HEADER_SIZE]);

    cipher
        .decrypt(nonce, &sealed[HEADER_SIZE..])
        .map_err(|e| AsymmetricError::DecryptionFailed(e.to_string()))
}

/// Derives the symmetric key from an ECDH shared secret.
fn derive_key(shared: &SharedSecret) -> Result<[u8; 32], AsymmetricError> {
    let hk = Hkdf::<Sha256>::new(None, shared.as_bytes());
    let mut key = [0u8; 32];
    hk.expand(HKDF_INFO, &mut key)
        .map_err(|_| AsymmetricError::KeyDerivationFailed)?;
    Ok(key)
}

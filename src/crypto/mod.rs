//! Cryptographic operations for spacehide.
//!
//! The stego codec never encrypts anything itself: it takes ciphertext bytes
//! in and hands ciphertext bytes back. The [`Cipher`] trait is the seam where
//! an asymmetric cipher is injected, and [`SealedBox`] is the production
//! implementation (X25519 + HKDF-SHA256 + ChaCha20Poly1305).

pub mod asymmetric;
pub mod keys;

pub use asymmetric::{open, seal, AsymmetricError};
pub use keys::{
    decode_public_key_pem, decode_secret_key_pem, encode_public_key_pem, encode_secret_key_pem,
    load_public_key, load_secret_key, KeyError, KeyPair,
};

use x25519_dalek::{PublicKey, StaticSecret};

/// An injected asymmetric cipher capability.
///
/// Implementations must satisfy `decrypt(secret, encrypt(public, m)) == m`
/// for matching key pairs; the stego codec treats the ciphertext as opaque
/// bytes. Tests substitute lightweight implementations here.
pub trait Cipher {
    /// Encrypts `plaintext` for the holder of the key matching `public`.
    fn encrypt(&self, public: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, AsymmetricError>;

    /// Decrypts `ciphertext` with the recipient's secret key.
    fn decrypt(&self, secret: &StaticSecret, ciphertext: &[u8])
        -> Result<Vec<u8>, AsymmetricError>;
}

/// The production cipher: sealed-box encryption from [`asymmetric`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SealedBox;

impl Cipher for SealedBox {
    fn encrypt(&self, public: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, AsymmetricError> {
        seal(plaintext, public)
    }

    fn decrypt(
        &self,
        secret: &StaticSecret,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, AsymmetricError> {
        open(ciphertext, secret)
    }
}

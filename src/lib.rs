//! # Spacehide - hide encrypted data in a document's whitespace
//!
//! Spacehide conceals an arbitrary byte payload inside the whitespace of a
//! text carrier (typically HTML) so that the document's visible content is
//! unchanged, and recovers the exact payload later.
//!
//! ## Overview
//!
//! - Payload bytes are written in base 4; each digit maps to one of four
//!   whitespace characters that render invisibly in HTML (`\n`, `\t`, space,
//!   `\r`), left-padded with a backspace sentinel to runs of exactly 4 symbols
//! - The carrier is split on its whitespace gaps and the runs are spliced in
//!   at those boundaries, so the payload rides along with the document itself
//! - The payload is encrypted before it enters the codec; the cipher is an
//!   injected [`Cipher`] capability, with [`SealedBox`] as the default
//!
//! The design assumes the carrier's exact whitespace bytes survive transit.
//! Any whitespace-normalizing hop (most mail gateways, many proxies) destroys
//! the payload.
//!
//! ## Example Usage
//!
//! ```rust
//! use spacehide::{KeyPair, SealedBox, Stego};
//!
//! let carrier = "<p>Nothing to see here.</p>\n<p>Move along.</p>";
//!
//! let recipient_keys = KeyPair::generate();
//! let stego = Stego::new(SealedBox);
//!
//! // Encode: encrypt, then hide in the carrier's whitespace
//! let encoded = stego
//!     .encode(recipient_keys.public_key(), b"the cake is a lie", carrier)
//!     .unwrap();
//!
//! // Decode: scan the whitespace, then decrypt
//! let recovered = stego.decode(recipient_keys.secret_key(), &encoded).unwrap();
//! assert_eq!(recovered, b"the cake is a lie");
//! ```
//!
//! ## Modules
//!
//! - [`stego`]: the whitespace codec (alphabet, byte/payload codecs, region
//!   distribution, run extraction)
//! - [`crypto`]: key management and the injected cipher capability
//! - [`encoder`] / [`decoder`]: the encrypt-then-hide and scan-then-decrypt
//!   orchestration

pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod stego;

// Re-export commonly used types at the crate root
pub use crypto::{Cipher, KeyPair, SealedBox};
pub use decoder::{decode, DecodeError};
pub use encoder::{encode, EncodeError};
pub use stego::{
    decode_payload, embed, encode_byte, encode_payload, extract, extract_runs, CodecError,
    ExtractError, DATA_SYMBOLS, PADDING_SYMBOL, RUN_WIDTH,
};

use x25519_dalek::{PublicKey, StaticSecret};

/// A stego codec bound to an injected cipher capability.
///
/// The cipher is wired in once at construction and reused for every call,
/// mirroring how the encrypt/decrypt functions are injected collaborators
/// rather than something the codec owns. Use [`Stego::new`] with any
/// [`Cipher`] implementation, or `Stego::default()` for [`SealedBox`].
#[derive(Debug, Clone, Default)]
pub struct Stego<C: Cipher> {
    cipher: C,
}

impl<C: Cipher> Stego<C> {
    /// Creates a codec around the given cipher.
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Encrypts `message` and hides it in the whitespace of `carrier`.
    ///
    /// See [`encoder::encode`].
    pub fn encode(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        carrier: &str,
    ) -> Result<String, EncodeError> {
        encoder::encode(&self.cipher, public_key, message, carrier)
    }

    /// Recovers and decrypts the payload hidden in `carrier`.
    ///
    /// See [`decoder::decode`].
    pub fn decode(&self, secret_key: &StaticSecret, carrier: &str) -> Result<Vec<u8>, DecodeError> {
        decoder::decode(&self.cipher, secret_key, carrier)
    }
}

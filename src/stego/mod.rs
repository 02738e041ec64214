//! The whitespace stego codec.
//!
//! This module provides:
//! - The 4-digit whitespace alphabet plus its padding sentinel
//! - Fixed-width byte and payload codecs
//! - Payload distribution across a carrier's whitespace regions
//! - Run extraction from an encoded carrier
//!
//! Everything here is a pure value-to-value transformation: no I/O, no shared
//! mutable state, safe to call from any number of threads.

pub mod alphabet;
pub mod codec;
pub mod embed;
pub mod extract;

pub use alphabet::{digit_for_symbol, is_symbol, DATA_SYMBOLS, PADDING_SYMBOL, RUN_WIDTH};
pub use codec::{decode_byte, decode_payload, encode_byte, encode_payload, CodecError};
pub use embed::embed;
pub use extract::{extract, extract_runs, ExtractError};

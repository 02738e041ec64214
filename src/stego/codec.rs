//! Byte and payload codecs.
//!
//! One byte becomes a run of exactly [`RUN_WIDTH`] symbols: the byte's base-4
//! digits mapped through the alphabet, left-padded with the sentinel. A
//! payload is the in-order concatenation of its byte runs, so `n` bytes always
//! encode to `4 * n` symbols with no delimiters in between.

use thiserror::Error;

use super::alphabet::{digit_for_symbol, symbol_for_digit, PADDING_SYMBOL, RUN_WIDTH};

/// Errors that can occur while decoding stego symbols.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Encoded length {0} is not a multiple of 4")]
    MalformedLength(usize),

    #[error("Run has {0} symbols, expected exactly 4")]
    BadRunWidth(usize),
}

/// Encodes one byte as a fixed-width run of symbols.
///
/// The result is always exactly [`RUN_WIDTH`] symbols: the byte's base-4
/// digits (most-significant first) left-padded with [`PADDING_SYMBOL`].
pub fn encode_byte(value: u8) -> [char; RUN_WIDTH] {
    let mut run = [PADDING_SYMBOL; RUN_WIDTH];
    let mut rest = value;
    let mut idx = RUN_WIDTH;

    // Peel digits least-significant first into the right end of the run;
    // everything left of the leading digit stays padding.
    loop {
        idx -= 1;
        run[idx] = symbol_for_digit(rest & 3);
        rest >>= 2;
        if rest == 0 {
            break;
        }
    }

    run
}

/// Decodes a run of exactly [`RUN_WIDTH`] symbols back to one byte.
///
/// Padding symbols (and any character outside the data alphabet) are filtered
/// out before the remaining digits are parsed as base 4; a run of nothing but
/// padding decodes to 0. Rejecting foreign characters here would change
/// nothing in practice, since the scanner only ever admits alphabet
/// characters, and the filtering keeps the decoder total over scanner output.
pub fn decode_byte(run: &[char]) -> Result<u8, CodecError> {
    if run.len() != RUN_WIDTH {
        return Err(CodecError::BadRunWidth(run.len()));
    }

    let mut value = 0u8;
    for digit in run.iter().filter_map(|&symbol| digit_for_symbol(symbol)) {
        value = value * 4 + digit;
    }

    Ok(value)
}

/// Encodes a payload as the concatenation of its per-byte runs.
///
/// The result has `4 * bytes.len()` symbols; an empty payload yields an empty
/// string.
pub fn encode_payload(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * RUN_WIDTH);
    for &byte in bytes {
        out.extend(encode_byte(byte));
    }
    out
}

/// Decodes a concatenation of runs back to the payload bytes.
///
/// Fails with [`CodecError::MalformedLength`] unless the symbol count is a
/// multiple of [`RUN_WIDTH`].
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let symbols: Vec<char> = encoded.chars().collect();

    if symbols.len() % RUN_WIDTH != 0 {
        return Err(CodecError::MalformedLength(symbols.len()));
    }

    symbols.chunks(RUN_WIDTH).map(decode_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_byte_vectors() {
        // Digit symbols are ['\n', '\t', ' ', '\r'], padding is backspace.
        assert_eq!(encode_byte(0), ['\u{8}', '\u{8}', '\u{8}', '\n']);
        assert_eq!(encode_byte(1), ['\u{8}', '\u{8}', '\u{8}', '\t']);
        assert_eq!(encode_byte(2), ['\u{8}', '\u{8}', '\u{8}', ' ']);
        assert_eq!(encode_byte(3), ['\u{8}', '\u{8}', '\u{8}', '\r']);
        // 33 = 0201 in base 4
        assert_eq!(encode_byte(33), ['\u{8}', ' ', '\n', '\t']);
        assert_eq!(encode_byte(255), ['\r', '\r', '\r', '\r']);
    }

    #[test]
    fn test_encode_byte_width_is_always_four() {
        for value in 0..=255u8 {
            assert_eq!(encode_byte(value).len(), RUN_WIDTH);
        }
    }

    #[test]
    fn test_byte_roundtrip_all_values() {
        for value in 0..=255u8 {
            let run = encode_byte(value);
            assert_eq!(decode_byte(&run).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_byte_all_padding_is_zero() {
        let run = [PADDING_SYMBOL; RUN_WIDTH];
        assert_eq!(decode_byte(&run).unwrap(), 0);
    }

    #[test]
    fn test_decode_byte_filters_foreign_characters() {
        // Foreign characters contribute no digits, exactly like padding.
        assert_eq!(decode_byte(&['x', 'y', '\n', '\t']).unwrap(), 1);
        assert_eq!(decode_byte(&['x', '\r', '\r', '\r']).unwrap(), 63);
    }

    #[test]
    fn test_decode_byte_wrong_width() {
        assert!(matches!(
            decode_byte(&['\n', '\t']),
            Err(CodecError::BadRunWidth(2))
        ));
        assert!(matches!(
            decode_byte(&['\n'; 5]),
            Err(CodecError::BadRunWidth(5))
        ));
    }

    #[test]
    fn test_encode_payload_known_string() {
        // Fixture carried over from the original prototype's test suite.
        let encoded = encode_payload(b"hello world!");
        assert_eq!(
            encoded,
            "\t  \n\t \t\t\t \r\n\t \r\n\t \r\r\u{8} \n\n\t\r\t\r\t \r\r\t\r\n \t \r\n\t \t\n\u{8} \n\t"
        );
    }

    #[test]
    fn test_encode_payload_length() {
        assert_eq!(encode_payload(b"").len(), 0);
        assert_eq!(encode_payload(b"abc").chars().count(), 12);
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = b"Hello all! This is a test.";
        let encoded = encode_payload(payload);
        assert_eq!(decode_payload(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_payload_roundtrip_all_byte_values() {
        let payload: Vec<u8> = (0..=255).collect();
        let encoded = encode_payload(&payload);
        assert_eq!(decode_payload(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_decode_payload_malformed_length() {
        let result = decode_payload("\n\t ");
        assert!(matches!(result, Err(CodecError::MalformedLength(3))));
    }

    #[test]
    fn test_decode_payload_empty() {
        assert_eq!(decode_payload("").unwrap(), Vec::<u8>::new());
    }
}

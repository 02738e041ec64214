//! Run extraction from an encoded carrier.
//!
//! Every encoded run is exactly [`RUN_WIDTH`] alphabet characters, and those
//! characters are otherwise rare in a document, so scanning in fixed-width
//! windows recovers run boundaries without any explicit delimiters.

use thiserror::Error;

use super::alphabet::{is_symbol, RUN_WIDTH};
use super::codec::{decode_payload, CodecError};

/// Errors that can occur while scanning an encoded carrier.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Carrier contains no stego data")]
    NoStegoData,

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Collects every run of exactly [`RUN_WIDTH`] consecutive alphabet symbols,
/// greedily and non-overlapping, in document order.
///
/// Fewer than [`RUN_WIDTH`] symbols between two stretches of ordinary text is
/// only ever a separator, never payload, so short groups are dropped.
pub fn extract_runs(carrier: &str) -> Result<String, ExtractError> {
    let mut runs = String::new();
    let mut pending: Vec<char> = Vec::with_capacity(RUN_WIDTH);

    for ch in carrier.chars() {
        if is_symbol(ch) {
            pending.push(ch);
            if pending.len() == RUN_WIDTH {
                runs.extend(pending.drain(..));
            }
        } else {
            pending.clear();
        }
    }

    if runs.is_empty() {
        return Err(ExtractError::NoStegoData);
    }

    Ok(runs)
}

/// Recovers the payload bytes hidden in an encoded carrier.
pub fn extract(carrier: &str) -> Result<Vec<u8>, ExtractError> {
    let runs = extract_runs(carrier)?;
    Ok(decode_payload(&runs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::codec::encode_payload;
    use crate::stego::embed::embed;

    #[test]
    fn test_extract_runs_single_run() {
        let encoded = format!("text{}more", encode_payload(b"A"));
        assert_eq!(extract_runs(&encoded).unwrap(), encode_payload(b"A"));
    }

    #[test]
    fn test_extract_runs_in_document_order() {
        let encoded = format!(
            "one{}two{}three",
            encode_payload(b"x"),
            encode_payload(b"y")
        );
        assert_eq!(extract_runs(&encoded).unwrap(), encode_payload(b"xy"));
    }

    #[test]
    fn test_extract_runs_drops_short_groups() {
        // Single separator spaces must not contribute symbols.
        let encoded = format!("a b{}c d", encode_payload(b"Z"));
        assert_eq!(extract_runs(&encoded).unwrap(), encode_payload(b"Z"));
    }

    #[test]
    fn test_extract_runs_greedy_in_long_stretch() {
        // Five consecutive symbols: only the first four form a run, the
        // trailing one is dropped.
        let mut stretch = encode_payload(b"q");
        stretch.push(' ');
        let encoded = format!("head{}tail", stretch);
        assert_eq!(extract_runs(&encoded).unwrap(), encode_payload(b"q"));
    }

    #[test]
    fn test_extract_runs_no_stego_data() {
        assert!(matches!(
            extract_runs("plain-text-with-no-gaps"),
            Err(ExtractError::NoStegoData)
        ));
        assert!(matches!(extract_runs(""), Err(ExtractError::NoStegoData)));
    }

    #[test]
    fn test_extract_roundtrip_through_embed() {
        let carrier = "Lorem ipsum dolor\nsit amet, consectetur\tadipiscing elit";
        let payload = b"hidden in plain sight";

        let embedded = embed(payload, carrier);
        assert_eq!(extract(&embedded).unwrap(), payload);
    }

    #[test]
    fn test_extract_empty_payload_is_no_stego_data() {
        // An empty payload leaves only lone separator spaces behind.
        let embedded = embed(&[], "a b c");
        assert!(matches!(
            extract(&embedded),
            Err(ExtractError::NoStegoData)
        ));
    }
}

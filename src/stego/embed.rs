//! Payload distribution across a carrier's whitespace regions.
//!
//! The carrier is split on its maximal whitespace runs into text regions, and
//! the encoded payload is spliced back in at those same boundaries: each
//! region gets its share of byte runs appended after it, and boundaries with
//! no payload left get a single plain space so the visible text keeps its
//! separators.

use super::alphabet::RUN_WIDTH;
use super::codec::encode_payload;

/// Splices `payload` into the whitespace of `carrier`.
///
/// Every payload byte appears exactly once, in order, at or after its
/// region's boundary. The visible (non-whitespace) text of the carrier is
/// unchanged; only whitespace is rewritten. A carrier with no whitespace at
/// all gets the full encoded payload appended at the end.
pub fn embed(payload: &[u8], carrier: &str) -> String {
    let mut out = String::with_capacity(carrier.len() + payload.len() * RUN_WIDTH);

    // Degenerate case: nowhere to splice between regions.
    if !carrier.chars().any(char::is_whitespace) {
        out.push_str(carrier);
        out.push_str(&encode_payload(payload));
        return out;
    }

    let regions = split_regions(carrier);
    let region_count = regions.len();

    // Every region must carry at least one byte, or a payload shorter than
    // the region count would silently lose its tail.
    let bytes_per_region = (payload.len() / region_count).max(1);
    let remainder = if payload.len() > region_count {
        payload.len() % region_count
    } else {
        0
    };

    for (idx, region) in regions.iter().enumerate() {
        out.push_str(region);

        let from = bytes_per_region * idx;
        if from < payload.len() {
            let to = (from + bytes_per_region).min(payload.len());
            out.push_str(&encode_payload(&payload[from..to]));
        } else {
            // No payload for this boundary; restore a visible separator.
            out.push(' ');
        }
    }

    if remainder > 0 {
        out.push_str(&encode_payload(&payload[region_count * bytes_per_region..]));
    }

    out
}

/// Splits a carrier on maximal whitespace runs.
///
/// Leading or trailing whitespace yields an empty region at that edge, so the
/// region count always equals the number of whitespace gaps plus one.
fn split_regions(carrier: &str) -> Vec<&str> {
    let mut regions = Vec::new();
    let mut start = 0;
    let mut in_whitespace = false;

    for (idx, ch) in carrier.char_indices() {
        if ch.is_whitespace() {
            if !in_whitespace {
                regions.push(&carrier[start..idx]);
                in_whitespace = true;
            }
        } else if in_whitespace {
            start = idx;
            in_whitespace = false;
        }
    }

    if in_whitespace {
        regions.push("");
    } else {
        regions.push(&carrier[start..]);
    }

    regions
}

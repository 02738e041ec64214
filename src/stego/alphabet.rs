//! The whitespace symbol alphabet.
//!
//! Payload bytes are written in base 4, and each base-4 digit maps to one of
//! four whitespace-class characters that render invisibly in HTML. A fifth
//! sentinel character is used only to left-pad a byte's digits to a fixed
//! width; it never carries a digit value of its own.

/// Data symbols, indexed by base-4 digit value.
pub const DATA_SYMBOLS: [char; 4] = ['\n', '\t', ' ', '\r'];

/// Sentinel used to left-pad a run to [`RUN_WIDTH`] symbols.
///
/// Backspace is invisible in rendered HTML and is not a data symbol, so
/// padding can never be mistaken for a payload digit.
pub const PADDING_SYMBOL: char = '\u{0008}';

/// Number of symbols in one encoded run (255 = 3333 in base 4).
pub const RUN_WIDTH: usize = 4;

/// Maps a base-4 digit to its data symbol.
pub(crate) fn symbol_for_digit(digit: u8) -> char {
    DATA_SYMBOLS[(digit & 3) as usize]
}

/// Maps a data symbol back to its base-4 digit.
///
/// Returns `None` for the padding sentinel and for any character outside the
/// alphabet.
pub fn digit_for_symbol(symbol: char) -> Option<u8> {
    DATA_SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|digit| digit as u8)
}

/// Returns true if `ch` belongs to the 5-character alphabet (data or padding).
pub fn is_symbol(ch: char) -> bool {
    ch == PADDING_SYMBOL || DATA_SYMBOLS.contains(&ch)
}

//! Helpers for DVB text fields (network, provider, service and event names).
//!
//! Text fields are stored as raw bytes. A leading byte in `0x01..=0x1F`
//! selects a character table; these helpers skip the selector and decode the
//! rest as lossy UTF-8, which is right for ASCII and the UTF-8 table (`0x15`)
//! and readable enough for the Latin tables.

use std::borrow::Cow;

/// Returns the character table selector bytes at the start of `text`.
///
/// `0x10` is followed by a two byte table id and `0x1F` by a one byte
/// encoding type id.
pub fn selector_len(text: &[u8]) -> usize {
    match text.first() {
        Some(0x10) => 3.min(text.len()),
        Some(0x1F) => 2.min(text.len()),
        Some(0x01..=0x1E) => 1,
        _ => 0,
    }
}

/// Decodes `text` as lossy UTF-8 after skipping its character table selector.
pub fn decode_lossy(text: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(&text[selector_len(text)..])
}

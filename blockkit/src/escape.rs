//! Entity escaping for Slack text objects
//!
//! Slack reserves `&`, `<` and `>` for its own control sequences (links,
//! mentions, dates), so every literal coming from the document has to go
//! through [`escape_into`] before it lands in a block.

use memchr::memchr3;

fn entity(byte: u8) -> &'static str {
    match byte {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        _ => unreachable!("memchr3 only reports the three reserved bytes"),
    }
}

/// Append `text` to `out`, replacing the reserved characters with entities.
///
/// The scan is a single left-to-right pass; runs without reserved characters
/// are copied in one go.
pub fn escape_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0;

    while let Some(offset) = memchr3(b'&', b'<', b'>', &bytes[start..]) {
        let at = start + offset;
        // The reserved characters are ASCII, so `at` is always a char boundary.
        out.push_str(&text[start..at]);
        out.push_str(entity(bytes[at]));
        start = at + 1;
    }

    out.push_str(&text[start..]);
}

/// Convenience wrapper around [`escape_into`] returning a fresh string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

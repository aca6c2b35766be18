//! Display rendering of binary payloads.
//!
//! Binary frames cross the transport boundary as base64. Inspectors want
//! something readable instead, so the bytes are listed in decimal:
//! `aGk=` renders as `[104,105]`. The result is for display only and is
//! not meant to be decoded back into bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use tracing::trace;

/// Rendered form of a payload that decodes to nothing.
pub const NO_VALUE: &str = "(no value)";

/// Renders a base64 binary payload for display.
///
/// Returns [`NO_VALUE`] when the input does not decode.
#[must_use]
pub fn render_binary_payload(encoded: &str) -> String {
    match Base64Standard.decode(encoded) {
        Ok(bytes) => render_bytes(&bytes),
        Err(err) => {
            trace!(%err, "Binary payload did not decode");
            NO_VALUE.to_string()
        }
    }
}

/// Renders raw bytes as a bracketed decimal list.
#[must_use]
pub fn render_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 4);
    out.push('[');
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&byte.to_string());
    }
    out.push(']');
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_bytes() {
        assert_eq!(render_binary_payload("aGk="), "[104,105]");
    }

    #[test]
    fn test_render_single_zero() {
        assert_eq!(render_binary_payload("AA=="), "[0]");
    }

    #[test]
    fn test_render_empty_payload() {
        assert_eq!(render_binary_payload(""), "[]");
    }

    #[test]
    fn test_render_full_byte_range() {
        assert_eq!(render_bytes(&[0, 127, 255]), "[0,127,255]");
    }

    #[test]
    fn test_undecodable_payload() {
        assert_eq!(render_binary_payload("not base64!"), NO_VALUE);
    }
}

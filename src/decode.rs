//! Strict percent-decoding for front-matter values.
//!
//! Values may escape characters that would otherwise be read as syntax (a `,` inside a
//! tag, a `:` at the start of a title). Decoding mirrors `decodeURIComponent`: every `%`
//! must introduce two hex digits, the decoded bytes must be UTF-8, and `+` stays `+`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },

    #[error("percent escapes do not decode to valid UTF-8")]
    InvalidUtf8,
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

pub fn percent_decode(input: &str) -> Result<String, DecodeError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }

    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }
        let high = bytes.get(i + 1).copied().and_then(hex_value);
        let low = bytes.get(i + 2).copied().and_then(hex_value);
        match (high, low) {
            (Some(h), Some(l)) => {
                decoded.push((h << 4) | l);
                i += 3;
            }
            _ => return Err(DecodeError::MalformedEscape { position: i }),
        }
    }

    String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8)
}

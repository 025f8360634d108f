//! RFC 4648 base32 without padding.
//!
//! Encoding never emits `=`. Decoding is lenient about presentation:
//! lowercase is accepted, spaces, dashes and padding are skipped, and
//! trailing bits that do not complete a byte are dropped. Any other
//! character is an error.

use crate::error::Base32Error;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Encode bytes as unpadded base32.
///
/// ```
/// assert_eq!(imagemap::base32::encode(b"foobar"), "MZXW6YTBOI");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }

    out
}

/// Decode base32 text.
pub fn decode(text: &str) -> Result<Vec<u8>, Base32Error> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, character) in text.chars().enumerate() {
        if matches!(character, ' ' | '-' | '=') {
            continue;
        }

        let value = digit_value(character).ok_or(Base32Error::InvalidCharacter {
            character,
            position,
        })?;

        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

fn digit_value(character: char) -> Option<u32> {
    match character.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(c as u32 - 'A' as u32),
        c @ '2'..='7' => Some(c as u32 - '2' as u32 + 26),
        _ => None,
    }
}

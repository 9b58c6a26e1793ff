//! Sparse glyph lookup keys.

/// Encode a scalar as its UTF-8 bytes read as one big-endian integer.
///
/// This is not a general codec: it is the sparse, collision-free key space
/// the runtime's lookup table uses, so the runtime applies the identical
/// transform to decoded input text. No normalization, no collapsing of
/// equivalent scalars.
///
/// `'A'` (U+0041) -> `0x41`; U+0E01 -> UTF-8 `E0 B8 81` -> `0x00E0B881`.
pub fn utf8_key(codepoint: char) -> u32 {
    let mut buf = [0u8; 4];
    codepoint
        .encode_utf8(&mut buf)
        .as_bytes()
        .iter()
        .fold(0u32, |key, &byte| (key << 8) | u32::from(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_the_byte_itself() {
        assert_eq!(utf8_key('A'), 0x41);
        assert_eq!(utf8_key(' '), 0x20);
        assert_eq!(utf8_key('~'), 0x7E);
    }

    #[test]
    fn two_byte_scalars() {
        // U+00E9 -> C3 A9
        assert_eq!(utf8_key('\u{E9}'), 0xC3A9);
    }

    #[test]
    fn thai_scalars_use_three_bytes() {
        // U+0E01 -> E0 B8 81
        assert_eq!(utf8_key('\u{0E01}'), 0x00E0_B881);
        // U+0E7F -> E0 B9 BF
        assert_eq!(utf8_key('\u{0E7F}'), 0x00E0_B9BF);
    }

    #[test]
    fn four_byte_scalars_fill_the_key() {
        // U+10348 -> F0 90 8D 88
        assert_eq!(utf8_key('\u{10348}'), 0xF090_8D88);
    }
}

//! The compiled character repertoire.
//!
//! Fixed policy, not user-configurable: printable ASCII followed by the Thai
//! block. The enumeration order matters because it determines the glyph
//! order of every emitted asset.

use std::ops::RangeInclusive;

/// Inclusive scalar ranges, in enumeration order.
const RANGES: &[RangeInclusive<u32>] = &[
    0x20..=0x7E,     // printable ASCII
    0x0E00..=0x0E7F, // Thai
];

/// Every codepoint to compile, in fixed order.
pub fn codepoints() -> impl Iterator<Item = char> {
    RANGES
        .iter()
        .flat_map(|range| range.clone())
        .filter_map(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_precedes_thai() {
        let all: Vec<char> = codepoints().collect();
        assert_eq!(all.first(), Some(&' '));
        assert_eq!(all[94], '~');
        assert_eq!(all[95], '\u{0E00}');
        assert_eq!(all.last(), Some(&'\u{0E7F}'));
    }

    #[test]
    fn repertoire_size_is_fixed() {
        // 95 printable ASCII + 128 Thai block scalars.
        assert_eq!(codepoints().count(), 223);
    }

    #[test]
    fn enumeration_is_strictly_increasing() {
        let all: Vec<u32> = codepoints().map(u32::from).collect();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

//! Conversion of numbers into per-digit segment patterns.
//!
//! Numbers are rendered like `%6d`: right-justified in six character cells, blank-padded, with a
//! `-` directly left of the first digit of a negative value. Each cell then goes through the glyph
//! table. Values that do not fit are clamped to `MIN_NUM`/`MAX_NUM` rather than truncated.

use itertools::izip;

use crate::command::consts::*;

pub mod glyph {
    //! The 7-segment font of the glass. Bit 7 is never part of a glyph.

    use crate::command::consts::GLYPH_MASK;

    #[cfg_attr(rustfmt, rustfmt_skip)]
    const GLYPHS: [(char, u8); 12] = [
        ('0', 0x7D), ('1', 0x60), ('2', 0x3E), ('3', 0x7A),
        ('4', 0x63), ('5', 0x5B), ('6', 0x5F), ('7', 0x70),
        ('8', 0x7F), ('9', 0x7B), ('-', 0x02), (' ', 0x00),
    ];

    /// Segment pattern for `c`. Anything without a glyph is blank.
    pub fn encode(c: char) -> u8 {
        GLYPHS
            .iter()
            .find(|&&(g, _)| g == c)
            .map_or(0x00, |&(_, pattern)| pattern)
    }

    /// The character drawn by `pattern`, ignoring bit 7.
    pub fn decode(pattern: u8) -> Option<char> {
        let pattern = pattern & GLYPH_MASK;
        GLYPHS
            .iter()
            .find(|&&(_, p)| p == pattern)
            .map(|&(c, _)| c)
    }
}

const PRECISION_SCALE: [f64; 4] = [1.0, 10.0, 100.0, 1000.0];

/// Render `value` as six right-justified ASCII cells. `value` must already be within
/// `MIN_NUM..=MAX_NUM`.
fn render_decimal(value: i32) -> [u8; DISPLAY_SIZE] {
    let mut cells = [b' '; DISPLAY_SIZE];
    let mut magnitude = value.unsigned_abs();
    let mut pos = DISPLAY_SIZE;
    loop {
        pos -= 1;
        cells[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 || pos == 0 {
            break;
        }
    }
    if value < 0 && pos > 0 {
        cells[pos - 1] = b'-';
    }
    cells
}

/// Segment patterns for an integer, one per digit in buffer order (leftmost digit first).
pub fn format_integer(value: i32) -> [u8; DISPLAY_SIZE] {
    let cells = render_decimal(value.max(MIN_NUM).min(MAX_NUM));
    let mut patterns = [0u8; DISPLAY_SIZE];
    for (pattern, &cell) in izip!(patterns.iter_mut(), cells.iter()) {
        *pattern = glyph::encode(cell as char);
    }
    patterns
}

/// Segment patterns for a fixed-point value with `precision` fractional digits, together with the
/// precision actually used, which is also the decimal point position to light.
///
/// Precision is capped at 3 for non-negative values and 2 for negative ones, since the sign takes
/// a cell. The value is scaled and truncated toward zero, then clamped like an integer.
pub fn format_fixed(value: f32, precision: u8) -> ([u8; DISPLAY_SIZE], u8) {
    let precision = if value >= 0.0 {
        precision.min(MAX_POSITIVE_PRECISION)
    } else {
        precision.min(MAX_NEGATIVE_PRECISION)
    };
    // Scaled in f64, where an f32 times 10^3 is exact, so the cast truncates the true product.
    // Float to int casts saturate, and NaN becomes 0.
    let scaled = (f64::from(value) * PRECISION_SCALE[precision as usize]) as i32;
    (format_integer(scaled), precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::string::String;

    fn decode_all(patterns: &[u8; DISPLAY_SIZE]) -> String {
        patterns
            .iter()
            .map(|&p| glyph::decode(p).unwrap_or('?'))
            .collect()
    }

    #[test]
    fn glyph_table() {
        assert_eq!(glyph::encode('0'), 0x7D);
        assert_eq!(glyph::encode('4'), 0x63);
        assert_eq!(glyph::encode('8'), 0x7F);
        assert_eq!(glyph::encode('-'), 0x02);
        assert_eq!(glyph::encode(' '), 0x00);
        assert_eq!(glyph::encode('x'), 0x00);
        assert_eq!(glyph::decode(0x80 | 0x60), Some('1'));
        assert_eq!(glyph::decode(0x01), None);
    }

    #[test]
    fn integer_layout() {
        assert_eq!(format_integer(0), [0, 0, 0, 0, 0, 0x7D]);
        assert_eq!(format_integer(42), [0, 0, 0, 0, 0x63, 0x3E]);
        assert_eq!(format_integer(-7), [0, 0, 0, 0, 0x02, 0x70]);
        assert_eq!(decode_all(&format_integer(123456)), "123456");
        assert_eq!(decode_all(&format_integer(-99999)), "-99999");
        assert_eq!(decode_all(&format_integer(-1205)), " -1205");
    }

    #[test]
    fn integer_clamps() {
        assert_eq!(format_integer(1_000_000), format_integer(MAX_NUM));
        assert_eq!(format_integer(i32::MAX), format_integer(MAX_NUM));
        assert_eq!(format_integer(-100_000), format_integer(MIN_NUM));
        assert_eq!(format_integer(i32::MIN), format_integer(MIN_NUM));
    }

    #[test]
    fn fixed_positive() {
        assert_eq!(format_fixed(3.14159, 3), (format_integer(3141), 3));
        assert_eq!(format_fixed(3.14159, 9), (format_integer(3141), 3));
        assert_eq!(format_fixed(2.5, 0), (format_integer(2), 0));
        assert_eq!(format_fixed(12.75, 1), (format_integer(127), 1));
    }

    #[test]
    fn fixed_negative() {
        assert_eq!(format_fixed(-3.14159, 3), (format_integer(-314), 2));
        assert_eq!(format_fixed(-0.5, 1), (format_integer(-5), 1));
        // Truncated toward zero, not rounded.
        assert_eq!(format_fixed(-1.999, 2), (format_integer(-199), 2));
    }

    #[test]
    fn fixed_truncates_exact_product() {
        // 0.01f32 is just below 0.01, and an f32 product would round up to 1.0.
        assert_eq!(format_fixed(0.01, 2), (format_integer(0), 2));
        assert_eq!(format_fixed(0.009, 3), (format_integer(8), 3));
        assert_eq!(format_fixed(-0.01, 2), (format_integer(0), 2));
        assert_eq!(format_fixed(0.25, 2), (format_integer(25), 2));
    }

    #[test]
    fn fixed_clamps_after_scaling() {
        assert_eq!(format_fixed(1000.0, 3), (format_integer(MAX_NUM), 3));
        assert_eq!(format_fixed(-1000.0, 2), (format_integer(MIN_NUM), 2));
        assert_eq!(format_fixed(f32::INFINITY, 3), (format_integer(MAX_NUM), 3));
        assert_eq!(format_fixed(f32::NEG_INFINITY, 1), (format_integer(MIN_NUM), 1));
        assert_eq!(format_fixed(f32::NAN, 3).0, format_integer(0));
    }

    proptest! {
        #[test]
        fn integer_matches_padded_decimal(v in MIN_NUM..=MAX_NUM) {
            prop_assert_eq!(decode_all(&format_integer(v)), format!("{:>6}", v));
        }

        #[test]
        fn integer_above_range_is_max(v in (MAX_NUM + 1)..=i32::MAX) {
            prop_assert_eq!(format_integer(v), format_integer(MAX_NUM));
        }

        #[test]
        fn integer_below_range_is_min(v in i32::MIN..MIN_NUM) {
            prop_assert_eq!(format_integer(v), format_integer(MIN_NUM));
        }

        #[test]
        fn fixed_never_lights_bit_seven(v in proptest::num::f32::ANY, p in 0u8..8) {
            let (patterns, precision) = format_fixed(v, p);
            prop_assert!(patterns.iter().all(|&g| g & 0x80 == 0));
            prop_assert!(precision <= MAX_POSITIVE_PRECISION);
        }
    }
}

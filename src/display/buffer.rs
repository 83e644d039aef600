//! The in-memory image of the six digits.
//!
//! Each byte holds one digit's seven segments in bits 0-6. Bit 7 drives an indicator: the three
//! battery gauge segments live in digits 0-2 and the three decimal points in digits 3-5. Index 0
//! is the leftmost digit, which is the opposite of the controller's RAM address order.

use itertools::izip;

use crate::command::consts::*;

/// Digits carrying the battery gauge, innermost segment last.
const BATTERY_DIGITS: [usize; 3] = [0, 1, 2];
/// Digits carrying a decimal point.
const SEPARATOR_DIGITS: [usize; 3] = [3, 4, 5];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    buf: [u8; DISPLAY_SIZE],
}

impl DisplayBuffer {
    pub fn new() -> Self {
        DisplayBuffer {
            buf: [0; DISPLAY_SIZE],
        }
    }

    pub fn as_bytes(&self) -> &[u8; DISPLAY_SIZE] {
        &self.buf
    }

    /// Show a battery gauge of `level` bars out of three. Bars fill from digit 2 outwards, so
    /// level 1 lights digit 2, level 2 digits 1-2 and level 3 digits 0-2. Any other level leaves
    /// the gauge empty.
    pub fn set_battery(&mut self, level: u8) {
        for &i in BATTERY_DIGITS.iter() {
            self.buf[i] &= !BATTERY_SEG;
        }
        if level > 3 {
            return;
        }
        for &i in BATTERY_DIGITS.iter().rev().take(level as usize) {
            self.buf[i] |= BATTERY_SEG;
        }
    }

    /// Number of battery bars currently lit.
    pub fn battery_level(&self) -> u8 {
        BATTERY_DIGITS
            .iter()
            .filter(|&&i| self.buf[i] & BATTERY_SEG != 0)
            .count() as u8
    }

    /// Light the decimal point `position` digits from the right, so that many digits read as the
    /// fractional part. Position 0 or anything above 3 shows no decimal point.
    pub fn set_separator(&mut self, position: u8) {
        for &i in SEPARATOR_DIGITS.iter() {
            self.buf[i] &= !SEPARATOR_SEG;
        }
        if position == 0 || position > 3 {
            return;
        }
        self.buf[DISPLAY_SIZE - position as usize] |= SEPARATOR_SEG;
    }

    /// The decimal point position currently lit, 0 if none.
    pub fn separator(&self) -> u8 {
        SEPARATOR_DIGITS
            .iter()
            .find(|&&i| self.buf[i] & SEPARATOR_SEG != 0)
            .map_or(0, |&i| (DISPLAY_SIZE - i) as u8)
    }

    /// Replace the seven digit segments of every digit, keeping each bit 7 indicator.
    pub fn set_digits(&mut self, patterns: &[u8; DISPLAY_SIZE]) {
        for (byte, &pattern) in izip!(self.buf.iter_mut(), patterns.iter()) {
            *byte = (*byte & !GLYPH_MASK) | (pattern & GLYPH_MASK);
        }
    }
}

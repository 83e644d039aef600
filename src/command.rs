//! The command set for the HT1621.
//!
//! Commands are 12-bit frames: the 3-bit command mode ID `100`, followed by 9 command bits of which
//! the last is a don't-care. The driver sends this as a 4-bit header `1000` plus the 8-bit code.

use crate::interface::DisplayInterface;

pub mod consts {
    /// Number of 7-segment digits on the glass.
    pub const DISPLAY_SIZE: usize = 6;

    /// Largest value that fits in six digits.
    pub const MAX_NUM: i32 = 999_999;
    /// Smallest value that fits in six digits; one digit goes to the sign.
    pub const MIN_NUM: i32 = -99_999;

    /// Fractional digits available to a non-negative fixed-point value.
    pub const MAX_POSITIVE_PRECISION: u8 = 3;
    /// Fractional digits available to a negative fixed-point value.
    pub const MAX_NEGATIVE_PRECISION: u8 = 2;

    /// Mode header for a command transaction, sent as the top 4 bits.
    pub const MODE_CMD: u8 = 0x80;
    /// Mode header for a RAM write transaction, sent as the top 3 bits.
    pub const MODE_WR: u8 = 0xA0;

    /// Bit 7 of each buffer byte: a battery segment in digits 0-2, the decimal point in 3-5.
    pub const BATTERY_SEG: u8 = 0x80;
    pub const SEPARATOR_SEG: u8 = 0x80;
    /// Bits 0-6 of each buffer byte, the digit's seven segments.
    pub const GLYPH_MASK: u8 = 0x7F;
}

/// Clock source for the controller's system oscillator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oscillator {
    /// The on-chip 256kHz RC oscillator.
    InternalRc,
    /// An external 32.768kHz crystal on OSCI/OSCO.
    Crystal,
}

/// A controller command, sent in command mode with `Command::send`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// LCD 1/3 bias, 4 commons.
    Bias,
    /// Turn off both the system oscillator and the LCD bias generator.
    SystemDisable,
    /// Turn on the system oscillator.
    SystemEnable,
    /// Turn off the LCD bias generator, blanking the glass without losing RAM contents.
    LcdOff,
    /// Turn on the LCD bias generator.
    LcdOn,
    /// Select the system clock source.
    ClockSource(Oscillator),
    /// Control the tone (buzzer) outputs.
    Tone(bool),
    /// Disable the watchdog time-out flag output.
    WatchdogDisable,
}

impl Command {
    /// The 8 command bits following the mode header.
    pub fn code(self) -> u8 {
        match self {
            Command::Bias => 0x52,
            Command::SystemDisable => 0x00,
            Command::SystemEnable => 0x02,
            Command::LcdOff => 0x04,
            Command::LcdOn => 0x06,
            Command::ClockSource(Oscillator::Crystal) => 0x28,
            Command::ClockSource(Oscillator::InternalRc) => 0x30,
            Command::Tone(true) => 0x12,
            Command::Tone(false) => 0x10,
            Command::WatchdogDisable => 0x0A,
        }
    }

    pub fn send<DI>(self, iface: &mut DI) -> Result<(), ()>
    where
        DI: DisplayInterface,
    {
        iface.send_command(self.code())
    }
}

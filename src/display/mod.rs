//! The main API to the display driver. It brings the controller up, keeps an image of the six
//! digits and their indicators in RAM, and pushes that image to the controller after each change.
//!
//! Nothing here returns an error. A missing pin makes the affected operation a no-op, and bad
//! arguments are clamped or cleared, because a segment display should never stop its host.

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
pub mod testing {
    macro_rules! send {
        ([$a:expr, $d:expr]) => {
            Sent::Data($a, $d)
        };
        ($c:expr) => {
            Sent::Cmd($c)
        };
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }
}

pub mod buffer;

use hal::digital::v2::OutputPin;
use itertools::izip;

use crate::command::consts::*;
use crate::command::Command;
use crate::config::Config;
use crate::display::buffer::DisplayBuffer;
use crate::format;
use crate::interface;

/// A driver for an HT1621 driving a six digit, 7-segment glass with a three bar battery gauge and
/// three decimal points.
pub struct Display<DI, BL>
where
    DI: interface::DisplayInterface,
    BL: OutputPin,
{
    iface: DI,
    backlight: Option<BL>,
    buffer: DisplayBuffer,
}

impl<DI, BL> Display<DI, BL>
where
    DI: interface::DisplayInterface,
    BL: OutputPin,
{
    /// Construct a driver for the controller at `iface` and run the bring-up sequence described
    /// by `config`. `backlight` is an optional GPIO switching the backlight. The display RAM is
    /// left as it was; the first print, battery or separator call draws the whole image.
    pub fn new(iface: DI, backlight: Option<BL>, config: Config) -> Self {
        let mut display = Display {
            iface,
            backlight,
            buffer: DisplayBuffer::new(),
        };
        let sent = config.send(&mut display.iface);
        display.absorb(sent);
        display
    }

    /// Give back the interface and backlight pin.
    pub fn release(self) -> (DI, Option<BL>) {
        (self.iface, self.backlight)
    }

    /// The image most recently drawn, or about to be drawn.
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Show an integer, right-justified. Values outside -99999..=999999 are clamped. Decimal
    /// point and battery gauge are left as they are.
    pub fn print_integer(&mut self, value: i32) {
        self.buffer.set_digits(&format::format_integer(value));
        self.flush();
    }

    /// Show `value` with `precision` fractional digits and light the matching decimal point.
    /// At most 3 fractional digits are shown for non-negative values and 2 for negative ones.
    pub fn print_fixed(&mut self, value: f32, precision: u8) {
        let (patterns, precision) = format::format_fixed(value, precision);
        self.buffer.set_digits(&patterns);
        self.buffer.set_separator(precision);
        self.flush();
    }

    /// Show `level` bars (0-3) of the battery gauge. Other levels show an empty gauge.
    pub fn set_battery_level(&mut self, level: u8) {
        self.buffer.set_battery(level);
        self.flush();
    }

    /// Light the decimal point `position` (1-3) digits from the right, or none for 0 and
    /// anything above 3.
    pub fn set_separator(&mut self, position: u8) {
        self.buffer.set_separator(position);
        self.flush();
    }

    /// Blank every digit in the controller RAM. The in-memory image is kept, so the next flush
    /// brings the previous content back.
    pub fn clear(&mut self) {
        let mut sent = Ok(());
        for addr in (0..DISPLAY_SIZE as u8 * 2).step_by(2) {
            sent = sent.and(self.iface.send_data(addr, 0));
        }
        self.absorb(sent);
    }

    /// Write the in-memory image to the controller. RAM addresses run right to left: address 0
    /// holds the rightmost digit (buffer index 5) and address 10 the leftmost (index 0).
    pub fn flush(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("ht1621 flush {}", self.buffer);
        let mut sent = Ok(());
        for (addr, &byte) in izip!((0..).step_by(2), self.buffer.as_bytes().iter().rev()) {
            sent = sent.and(self.iface.send_data(addr, byte));
        }
        self.absorb(sent);
    }

    /// Turn the LCD bias generator on.
    pub fn display_on(&mut self) {
        let sent = Command::LcdOn.send(&mut self.iface);
        self.absorb(sent);
    }

    /// Turn the LCD bias generator off. RAM contents are kept.
    pub fn display_off(&mut self) {
        let sent = Command::LcdOff.send(&mut self.iface);
        self.absorb(sent);
    }

    /// Turn the tone outputs on.
    pub fn tone_on(&mut self) {
        let sent = Command::Tone(true).send(&mut self.iface);
        self.absorb(sent);
    }

    /// Turn the tone outputs off.
    pub fn tone_off(&mut self) {
        let sent = Command::Tone(false).send(&mut self.iface);
        self.absorb(sent);
    }

    /// Drive the backlight pin high, if there is one.
    pub fn backlight_on(&mut self) {
        if let Some(bl) = self.backlight.as_mut() {
            let sent = bl.set_high().map_err(|_| ());
            self.absorb(sent);
        }
    }

    /// Drive the backlight pin low, if there is one.
    pub fn backlight_off(&mut self) {
        if let Some(bl) = self.backlight.as_mut() {
            let sent = bl.set_low().map_err(|_| ());
            self.absorb(sent);
        }
    }

    /// Pin errors go no further than this; the image in RAM stays authoritative.
    fn absorb(&self, sent: Result<(), ()>) {
        if sent.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ht1621 pin driver error, transfer dropped");
        }
    }
}

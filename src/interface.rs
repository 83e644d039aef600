//! The wire interface to the HT1621. The controller is driven over a 3-wire synchronous serial
//! link (CS, WR clock, DATA) which is clocked entirely in software by toggling GPIOs.

use hal::digital::v2::OutputPin;

pub trait DisplayInterface {
    /// Send one controller command in its own chip-select transaction.
    fn send_command(&mut self, cmd: u8) -> Result<(), ()>;
    /// Write one byte of segment data to the 6-bit RAM address `addr`.
    fn send_data(&mut self, addr: u8, data: u8) -> Result<(), ()>;
}

/// Placeholder pin type for a line which is not connected. Use it as the type parameter of a
/// `None`, e.g. `None::<NoPin>`.
#[derive(Clone, Copy, Debug)]
pub struct NoPin;

impl OutputPin for NoPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub mod bitbang {
    //! Software-timed implementation of the HT1621 serial protocol. No delays are inserted
    //! between edges; the pin drivers themselves are expected to be slow enough (or to add their
    //! own delay) to meet the controller's 3.34us WR cycle time.

    use hal::digital::v2::OutputPin;

    use super::DisplayInterface;
    use crate::command::consts::{MODE_CMD, MODE_WR};

    /// Shifts left-aligned bit fields out over the WR (clock) and DATA lines. The controller
    /// latches DATA on the rising edge of WR.
    pub struct BitSerializer<CLK, DATA> {
        clk: Option<CLK>,
        data: Option<DATA>,
    }

    impl<CLK, DATA> BitSerializer<CLK, DATA>
    where
        CLK: OutputPin,
        DATA: OutputPin,
    {
        pub fn new(clk: Option<CLK>, data: Option<DATA>) -> Self {
            Self { clk, data }
        }

        /// Whether both lines needed to clock out bits are connected.
        pub fn is_connected(&self) -> bool {
            self.clk.is_some() && self.data.is_some()
        }

        /// Clock out the top `width` bits of `bits`, most significant first. For each bit WR is
        /// driven low, DATA is set, then WR is driven high. Does nothing if either line is
        /// missing.
        pub fn send(&mut self, bits: u8, width: u8) -> Result<(), ()> {
            let (clk, data) = match (self.clk.as_mut(), self.data.as_mut()) {
                (Some(clk), Some(data)) => (clk, data),
                _ => return Ok(()),
            };
            let mut field = bits;
            for _ in 0..width.min(8) {
                clk.set_low().map_err(|_| ())?;
                if field & 0x80 != 0 {
                    data.set_high().map_err(|_| ())?;
                } else {
                    data.set_low().map_err(|_| ())?;
                }
                clk.set_high().map_err(|_| ())?;
                field <<= 1;
            }
            Ok(())
        }

        pub(super) fn release(self) -> (Option<CLK>, Option<DATA>) {
            (self.clk, self.data)
        }
    }

    /// The 3-wire interface. Each command or data write is framed by its own active-low
    /// chip-select transaction.
    pub struct BitBangInterface<CS, CLK, DATA> {
        /// GPIO output connected to the /CS pin of the HT1621.
        cs: Option<CS>,
        serializer: BitSerializer<CLK, DATA>,
    }

    impl<CS, CLK, DATA> BitBangInterface<CS, CLK, DATA>
    where
        CS: OutputPin,
        CLK: OutputPin,
        DATA: OutputPin,
    {
        /// Create a new interface. `cs`, `clk` and `data` are the GPIO outputs connected to the
        /// /CS, /WR and DATA pins. Pins must already be configured as push-pull outputs. Any of
        /// them may be `None`, in which case every transaction silently does nothing.
        pub fn new(cs: Option<CS>, clk: Option<CLK>, data: Option<DATA>) -> Self {
            Self {
                cs,
                serializer: BitSerializer::new(clk, data),
            }
        }

        /// Give back the pins.
        pub fn release(self) -> (Option<CS>, Option<CLK>, Option<DATA>) {
            let (clk, data) = self.serializer.release();
            (self.cs, clk, data)
        }

        /// Run `body` with chip-select asserted. The presence of every line is checked up front
        /// so a transaction is either sent in full or not at all, and chip-select is released
        /// even when a pin reports an error part way through.
        fn transaction<F>(&mut self, body: F) -> Result<(), ()>
        where
            F: FnOnce(&mut BitSerializer<CLK, DATA>) -> Result<(), ()>,
        {
            let cs = match self.cs.as_mut() {
                Some(cs) if self.serializer.is_connected() => cs,
                _ => return Ok(()),
            };
            cs.set_low().map_err(|_| ())?;
            let sent = body(&mut self.serializer);
            let released = cs.set_high().map_err(|_| ());
            sent.and(released)
        }
    }

    impl<CS, CLK, DATA> DisplayInterface for BitBangInterface<CS, CLK, DATA>
    where
        CS: OutputPin,
        CLK: OutputPin,
        DATA: OutputPin,
    {
        fn send_command(&mut self, cmd: u8) -> Result<(), ()> {
            self.transaction(|ser| {
                ser.send(MODE_CMD, 4)?;
                ser.send(cmd, 8)
            })
        }

        fn send_data(&mut self, addr: u8, data: u8) -> Result<(), ()> {
            self.transaction(|ser| {
                ser.send(MODE_WR, 3)?;
                ser.send(addr << 2, 6)?;
                ser.send(data, 8)
            })
        }
    }

}

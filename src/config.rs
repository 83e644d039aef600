//! Bring-up configuration for the HT1621.

use crate::command::*;
use crate::interface;

/// A configuration for the controller. Builder methods offer a declarative way to either change a
/// setting at init time, or to leave it at the default.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    oscillator: Oscillator,
    tone_cmd: Option<Command>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new configuration using the internal RC oscillator and leaving the tone outputs
    /// at their power-on state.
    pub fn new() -> Self {
        Config {
            oscillator: Oscillator::InternalRc,
            tone_cmd: None,
        }
    }

    /// Extend this `Config` to select the system clock source. See `Command::ClockSource`.
    pub fn oscillator(self, oscillator: Oscillator) -> Self {
        Self { oscillator, ..self }
    }

    /// Extend this `Config` to explicitly switch the tone outputs on or off once the display is
    /// running. See `Command::Tone`.
    pub fn tone(self, enabled: bool) -> Self {
        Self {
            tone_cmd: Some(Command::Tone(enabled)),
            ..self
        }
    }

    /// Transmit the bring-up sequence encoded in `self` to the controller at `iface`. The order
    /// is fixed: bias, clock source, system off, watchdog flag off, system on, LCD on.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), ()>
    where
        DI: interface::DisplayInterface,
    {
        Command::Bias.send(iface)?;
        Command::ClockSource(self.oscillator).send(iface)?;
        Command::SystemDisable.send(iface)?;
        Command::WatchdogDisable.send(iface)?;
        Command::SystemEnable.send(iface)?;
        Command::LcdOn.send(iface)?;
        self.tone_cmd.map_or(Ok(()), |c| c.send(iface))
    }
}

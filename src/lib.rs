//! Driver library for the Holtek HT1621 RAM mapping LCD controller, driving a six digit
//! 7-segment glass with a battery gauge and decimal points over a bit-banged 3-wire interface.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;

pub mod command;
pub mod config;
pub mod display;
pub mod format;
pub mod interface;

// Re-exports for primary API.
pub use command::{consts, Oscillator};
pub use config::Config;
pub use display::buffer::DisplayBuffer;
pub use display::Display;
pub use interface::bitbang::BitBangInterface;
pub use interface::NoPin;

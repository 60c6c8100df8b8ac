//! Support for the 16x2 LCD & keypad shield, for use with embedded-hal v1.0
//!
//! The shield puts five push buttons on a resistor ladder read through a
//! single analog input, and drives the LCD backlight from one digital
//! output. This crate carries the board topology and the ladder's
//! threshold bands, decodes ADC samples into a [`Button`], and wraps the
//! backlight pin.
//!
//! ## Pin map (stock shield)
//!
//! | Pin | Function                                   |
//! |-----|--------------------------------------------|
//! | A0  | Buttons, analog input from voltage ladder  |
//! | A30 | Battery measurement input                  |
//! | A31 | Voltage input measurement                  |
//! | D4  | LCD bit 4                                  |
//! | D5  | LCD bit 5                                  |
//! | D6  | LCD bit 6                                  |
//! | D7  | LCD bit 7                                  |
//! | D8  | LCD RS                                     |
//! | D9  | LCD E                                      |
//! | D10 | LCD backlight (high = on, pulled up)       |
//!
//! ## Example
//!
//! ```
//! use lcd_keypad_shield::{decode, Builder, Button};
//!
//! let config = Builder::new().build().expect("stock shield configuration");
//!
//! assert_eq!(decode(285, &config.thresholds), Button::Down);
//! assert_eq!(decode(1023, &config.thresholds), Button::None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

pub mod adc;
pub mod backlight;
pub mod button;
pub mod config;
pub mod decode;
pub mod error;
pub mod keypad;
pub mod pins;
pub mod voltage;

#[cfg(test)]
mod mock;

pub use adc::AdcChannel;
pub use backlight::Backlight;
pub use button::{Button, InputEvent};
pub use config::{Builder, Config, Resolution, Thresholds};
pub use decode::decode;
pub use error::{BuilderError, Error};
pub use keypad::Keypad;
pub use pins::{AnalogPin, DigitalPin, ShieldPins};
pub use voltage::{Divider, VoltageChannel};

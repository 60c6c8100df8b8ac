//! Error types for the crate
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and runtime sampling ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors while reading an analog channel
//! - [`InvalidButtonCode`](crate::button::InvalidButtonCode) - Unknown numeric button code
//!
//! Backlight writes return the pin's own error type unchanged.
//!
//! ## Example
//!
//! ```
//! use lcd_keypad_shield::{Builder, BuilderError};
//!
//! // UP and DOWN bands would overlap with a 90 count window
//! let result = Builder::new().hysteresis(90).build();
//! assert!(matches!(result, Err(BuilderError::BandsOverlap { index: 1, .. })));
//!
//! // Thresholds must increase along the ladder
//! let result = Builder::new().levels([0, 280, 120, 480, 720]).build();
//! assert!(matches!(result, Err(BuilderError::ThresholdsNotIncreasing { index: 2 })));
//! ```

use crate::pins::DigitalPin;

/// Errors that can occur while sampling the shield's analog inputs
///
/// Generic over the channel's error type so callers can still match on the
/// underlying HAL error.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The analog channel failed to produce a sample
    Adc(E),
    /// The sample is larger than the configured resolution allows
    ///
    /// Usually means the ADC runs at a different width than the thresholds
    /// were written for.
    SampleOutOfRange {
        /// Raw sample returned by the channel
        sample: u16,
        /// Largest code for the configured resolution
        max: u16,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Adc(e) => write!(f, "ADC error: {e:?}"),
            Error::SampleOutOfRange { sample, max } => {
                write!(f, "Sample {sample} out of range (max {max})")
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

/// Errors that can occur when building configuration
///
/// Each of these describes a table or pin layout that would make keypad
/// decoding ambiguous or the shield unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Threshold at `index` is not greater than the one before it
    ThresholdsNotIncreasing {
        /// Ladder position of the offending threshold
        index: usize,
    },
    /// Bands around thresholds `index - 1` and `index` touch or overlap
    ///
    /// Adjacent thresholds must be more than `2 * hysteresis` apart.
    BandsOverlap {
        /// Ladder position of the upper threshold
        index: usize,
        /// Distance between the two thresholds
        gap: u16,
        /// Configured hysteresis
        hysteresis: u16,
    },
    /// Threshold plus hysteresis exceeds the ADC's largest code
    ThresholdOutOfRange {
        /// Ladder position of the offending threshold
        index: usize,
        /// Threshold value
        value: u16,
        /// Largest code for the configured resolution
        max: u16,
    },
    /// Two of the shield's digital functions were assigned the same pin
    PinConflict {
        /// The shared pin
        pin: DigitalPin,
    },
    /// Reference voltage of zero millivolts
    ZeroReference,
    /// Voltage divider with a zero term
    ZeroDivider,
    /// Voltage divider whose resistor sum doesn't fit in a `u32`
    DividerOutOfRange,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::ThresholdsNotIncreasing { index } => {
                write!(
                    f,
                    "Threshold {index} is not above threshold {}",
                    index.saturating_sub(1)
                )
            }
            BuilderError::BandsOverlap {
                index,
                gap,
                hysteresis,
            } => write!(
                f,
                "Bands {} and {index} overlap: gap {gap} must exceed 2 x hysteresis {hysteresis}",
                index.saturating_sub(1)
            ),
            BuilderError::ThresholdOutOfRange { index, value, max } => write!(
                f,
                "Threshold {index} ({value}) plus hysteresis exceeds ADC maximum {max}"
            ),
            BuilderError::PinConflict { pin } => write!(f, "Pin {pin} assigned twice"),
            BuilderError::ZeroReference => write!(f, "Reference voltage must be non-zero"),
            BuilderError::ZeroDivider => write!(f, "Divider ratio terms must be non-zero"),
            BuilderError::DividerOutOfRange => write!(f, "Divider resistor sum out of range"),
        }
    }
}

impl core::error::Error for BuilderError {}

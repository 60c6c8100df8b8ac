//! Analog input abstraction
//!
//! embedded-hal 1.0 has no ADC trait, so this module provides
//! [`AdcChannel`]: one configured analog input that can be sampled on
//! demand. Implement it on a HAL's channel type, or wrap a read function
//! with [`FnChannel`].
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use lcd_keypad_shield::adc::{AdcChannel, FnChannel};
//!
//! let mut ladder = FnChannel::new(|| Ok::<u16, Infallible>(281));
//! assert_eq!(ladder.read(), Ok(281));
//! ```

use core::fmt::Debug;

/// A single analog input
///
/// Samples are raw converter codes, right-aligned. Conversion to volts and
/// decoding are left to the caller.
pub trait AdcChannel {
    /// Error type for sampling
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Take one blocking sample
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion could not be completed.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

impl<T: AdcChannel + ?Sized> AdcChannel for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        T::read(self)
    }
}

/// Adapter turning a read function into an [`AdcChannel`]
///
/// Useful for HALs that expose sampling as a free function over a channel
/// number rather than as an owned channel type.
pub struct FnChannel<F> {
    read: F,
}

impl<F, E> FnChannel<F>
where
    F: FnMut() -> Result<u16, E>,
    E: Debug,
{
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F, E> AdcChannel for FnChannel<F>
where
    F: FnMut() -> Result<u16, E>,
    E: Debug,
{
    type Error = E;

    fn read(&mut self) -> Result<u16, Self::Error> {
        (self.read)()
    }
}

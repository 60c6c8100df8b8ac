//! LCD backlight control
//!
//! The backlight enable line is active high and pulled up on the board, so
//! the backlight is lit from power-up until something drives the pin low.
//! Every operation here is exactly one pin write.

use embedded_hal::digital::OutputPin;

/// Backlight driven from a single [`OutputPin`]
pub struct Backlight<P> {
    pin: P,
    is_on: bool,
}

impl<P> Backlight<P>
where
    P: OutputPin,
{
    /// Wrap the backlight pin without touching it
    ///
    /// The state starts out as on, matching the pull-up default.
    pub fn new(pin: P) -> Self {
        Self { pin, is_on: true }
    }

    /// Drive the pin high
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.set(true)
    }

    /// Drive the pin low
    pub fn off(&mut self) -> Result<(), P::Error> {
        self.set(false)
    }

    /// Drive the pin high when `state` is true, low otherwise
    pub fn set(&mut self, state: bool) -> Result<(), P::Error> {
        if state {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        if state != self.is_on {
            log::debug!("Backlight {}", if state { "on" } else { "off" });
        }
        self.is_on = state;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.set(!self.is_on)
    }

    /// Last commanded state
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPin, MockPinError};

    #[test]
    fn new_assumes_pull_up_without_writing() {
        let backlight = Backlight::new(MockPin::default());
        assert!(backlight.is_on());
        assert_eq!(backlight.release().writes, 0);
    }

    #[test]
    fn on_and_off_write_once_each() {
        let mut backlight = Backlight::new(MockPin::default());
        backlight.off().unwrap();
        assert!(!backlight.is_on());
        backlight.on().unwrap();
        assert!(backlight.is_on());

        let pin = backlight.release();
        assert!(pin.high);
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn last_set_wins() {
        let mut backlight = Backlight::new(MockPin::default());
        backlight.set(true).unwrap();
        backlight.set(false).unwrap();
        assert!(!backlight.release().high);
    }

    #[test]
    fn repeated_set_is_idempotent() {
        let mut backlight = Backlight::new(MockPin::default());
        for _ in 0..3 {
            backlight.set(false).unwrap();
        }
        let pin = backlight.release();
        assert!(!pin.high);
        assert_eq!(pin.writes, 3);
    }

    #[test]
    fn toggle_flips_commanded_state() {
        let mut backlight = Backlight::new(MockPin::default());
        backlight.toggle().unwrap();
        assert!(!backlight.is_on());
        backlight.toggle().unwrap();
        assert!(backlight.release().high);
    }

    #[test]
    fn pin_error_leaves_state_unchanged() {
        let mut backlight = Backlight::new(MockPin::broken());
        assert_eq!(backlight.off(), Err(MockPinError));
        assert!(backlight.is_on());
    }
}

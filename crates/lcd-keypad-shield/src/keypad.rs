//! Keypad polling
//!
//! [`Keypad`] owns the ladder's analog channel, decodes each sample, and
//! turns changes in the decoded state into [`InputEvent`]s.

use crate::adc::AdcChannel;
use crate::button::{Button, InputEvent};
use crate::config::Thresholds;
use crate::decode::decode;
use crate::error::Error;

/// Five-button resistor-ladder keypad
pub struct Keypad<A> {
    adc: A,
    thresholds: Thresholds,
    current: Button,
}

impl<A> Keypad<A>
where
    A: AdcChannel,
{
    pub fn new(adc: A, thresholds: Thresholds) -> Self {
        Self {
            adc,
            thresholds,
            current: Button::None,
        }
    }

    /// Sample the ladder once and decode it
    ///
    /// Does not update the state tracked by [`Keypad::poll`]. A sample above
    /// the ADC's full scale is logged and decodes to [`Button::None`].
    pub fn read_button(&mut self) -> Result<Button, Error<A::Error>> {
        let sample = self.adc.read().map_err(Error::Adc)?;
        log::trace!("Keypad ADC: {}", sample);

        let max = self.thresholds.resolution().max_code();
        if sample > max {
            log::warn!("Keypad sample {} above full scale {}", sample, max);
            return Ok(Button::None);
        }
        Ok(decode(sample, &self.thresholds))
    }

    /// Sample the ladder and report a change in state
    ///
    /// Returns `Some(Press(b))` when `b` goes down from idle and
    /// `Some(Release(b))` when `b` goes up. Moving straight from one button
    /// to another reports the release first; the press of the new button
    /// follows on the next poll.
    pub fn poll(&mut self) -> Result<Option<InputEvent>, Error<A::Error>> {
        let button = self.read_button()?;
        if button == self.current {
            return Ok(None);
        }

        let event = match self.current {
            Button::None => {
                self.current = button;
                log::debug!("Button pressed: {}", button);
                InputEvent::Press(button)
            }
            held => {
                self.current = Button::None;
                log::debug!("Button released: {}", held);
                InputEvent::Release(held)
            }
        };
        Ok(Some(event))
    }

    /// Button held as of the last [`Keypad::poll`]
    pub fn current(&self) -> Button {
        self.current
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Give the channel back
    pub fn release(self) -> A {
        self.adc
    }
}

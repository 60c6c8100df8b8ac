//! Test doubles for the shield's hardware seams.

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::adc::AdcChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAdcError {
    /// Scripted failure
    Conversion,
    /// Ran past the end of the scripted samples
    Exhausted,
}

/// ADC channel replaying a fixed list of samples
pub struct MockAdc<'a> {
    samples: &'a [u16],
    next: usize,
    fail_at: Option<usize>,
}

impl<'a> MockAdc<'a> {
    pub fn new(samples: &'a [u16]) -> Self {
        Self {
            samples,
            next: 0,
            fail_at: None,
        }
    }

    /// Return `MockAdcError::Conversion` instead of the sample at `index`
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    pub fn reads(&self) -> usize {
        self.next
    }
}

impl AdcChannel for MockAdc<'_> {
    type Error = MockAdcError;

    fn read(&mut self) -> Result<u16, Self::Error> {
        let index = self.next;
        self.next += 1;
        if self.fail_at == Some(index) {
            return Err(MockAdcError::Conversion);
        }
        self.samples
            .get(index)
            .copied()
            .ok_or(MockAdcError::Exhausted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin recording its level and write count
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: usize,
    pub broken: bool,
}

impl MockPin {
    /// Pin whose every write fails
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn write(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.broken {
            return Err(MockPinError);
        }
        self.high = high;
        self.writes += 1;
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

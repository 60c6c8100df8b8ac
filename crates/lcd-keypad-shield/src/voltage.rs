//! Battery and input voltage measurement channels
//!
//! Both measurement inputs sit behind resistor dividers. A
//! [`VoltageChannel`] scales the raw sample back to the voltage at the
//! divider's top.

use crate::adc::AdcChannel;
use crate::config::{Config, Resolution};
use crate::error::{BuilderError, Error};

/// Divider ratio as `numerator / denominator`
///
/// For a divider of `r_top` over `r_bottom` the ratio is
/// `(r_top + r_bottom) / r_bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Divider {
    numerator: u32,
    denominator: u32,
}

impl Divider {
    /// Input connected straight to the ADC pin
    pub const DIRECT: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// # Errors
    ///
    /// Returns `BuilderError::ZeroDivider` if either term is zero
    pub const fn new(numerator: u32, denominator: u32) -> Result<Self, BuilderError> {
        if numerator == 0 || denominator == 0 {
            return Err(BuilderError::ZeroDivider);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Ratio for a two-resistor divider
    ///
    /// # Errors
    ///
    /// - `BuilderError::ZeroDivider` if `r_bottom` is zero
    /// - `BuilderError::DividerOutOfRange` if `r_top + r_bottom` overflows
    pub const fn from_resistors(r_top: u32, r_bottom: u32) -> Result<Self, BuilderError> {
        match r_top.checked_add(r_bottom) {
            Some(sum) => Self::new(sum, r_bottom),
            None => Err(BuilderError::DividerOutOfRange),
        }
    }

    /// Scale `millivolts` by the ratio, saturating at `u32::MAX`
    const fn apply(self, millivolts: u32) -> u32 {
        let scaled = millivolts as u64 * self.numerator as u64;
        let result = (scaled + self.denominator as u64 / 2) / self.denominator as u64;
        if result > u32::MAX as u64 {
            u32::MAX
        } else {
            result as u32
        }
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::DIRECT
    }
}

/// A voltage measurement input
pub struct VoltageChannel<A> {
    adc: A,
    resolution: Resolution,
    vref_mv: u16,
    divider: Divider,
}

impl<A> VoltageChannel<A>
where
    A: AdcChannel,
{
    pub fn new(adc: A, resolution: Resolution, vref_mv: u16, divider: Divider) -> Self {
        Self {
            adc,
            resolution,
            vref_mv,
            divider,
        }
    }

    /// Channel using the resolution and reference from `config`
    pub fn from_config(adc: A, config: &Config, divider: Divider) -> Self {
        Self::new(adc, config.thresholds.resolution(), config.vref_mv, divider)
    }

    /// Raw sample, checked against full scale
    pub fn read_raw(&mut self) -> Result<u16, Error<A::Error>> {
        let sample = self.adc.read().map_err(Error::Adc)?;
        let max = self.resolution.max_code();
        if sample > max {
            return Err(Error::SampleOutOfRange { sample, max });
        }
        Ok(sample)
    }

    /// Voltage at the divider input in millivolts
    pub fn read_millivolts(&mut self) -> Result<u32, Error<A::Error>> {
        let raw = self.read_raw()?;
        let at_pin = self.resolution.to_millivolts(raw, self.vref_mv);
        let millivolts = self.divider.apply(at_pin);
        log::trace!("Voltage ADC: {} -> {} mV", raw, millivolts);
        Ok(millivolts)
    }

    /// Give the channel back
    pub fn release(self) -> A {
        self.adc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAdc, MockAdcError};

    #[test]
    fn direct_channel_maps_full_scale_to_reference() {
        let mut channel = VoltageChannel::new(
            MockAdc::new(&[1023, 0]),
            Resolution::Bits10,
            5000,
            Divider::DIRECT,
        );
        assert_eq!(channel.read_millivolts(), Ok(5000));
        assert_eq!(channel.read_millivolts(), Ok(0));
    }

    #[test]
    fn divider_scales_back_to_source_voltage() {
        // 10k over 10k halves the input
        let divider = Divider::from_resistors(10_000, 10_000).unwrap();
        let config = Config::default();
        let mut channel = VoltageChannel::from_config(MockAdc::new(&[512]), &config, divider);
        // 512 counts is 2502 mV at the pin
        assert_eq!(channel.read_millivolts(), Ok(5004));
    }

    #[test]
    fn over_range_sample_is_an_error() {
        let mut channel = VoltageChannel::new(
            MockAdc::new(&[300]),
            Resolution::Bits8,
            3300,
            Divider::DIRECT,
        );
        assert_eq!(
            channel.read_raw(),
            Err(Error::SampleOutOfRange {
                sample: 300,
                max: 255
            })
        );
    }

    #[test]
    fn adc_error_is_wrapped() {
        let mut channel = VoltageChannel::new(
            MockAdc::new(&[]),
            Resolution::Bits10,
            5000,
            Divider::DIRECT,
        );
        assert_eq!(
            channel.read_millivolts(),
            Err(Error::Adc(MockAdcError::Exhausted))
        );
    }

    #[test]
    fn large_ratio_saturates() {
        let divider = Divider::new(1_000_000, 1).unwrap();
        let mut channel =
            VoltageChannel::new(MockAdc::new(&[1023]), Resolution::Bits10, 5000, divider);
        assert_eq!(channel.read_millivolts(), Ok(u32::MAX));
    }

    #[test]
    fn overflowing_resistor_sum_is_rejected() {
        assert_eq!(
            Divider::from_resistors(u32::MAX, 1),
            Err(BuilderError::DividerOutOfRange)
        );
    }

    #[test]
    fn zero_divider_term_is_rejected() {
        assert_eq!(Divider::new(1, 0), Err(BuilderError::ZeroDivider));
        assert_eq!(
            Divider::from_resistors(10_000, 0),
            Err(BuilderError::ZeroDivider)
        );
    }
}

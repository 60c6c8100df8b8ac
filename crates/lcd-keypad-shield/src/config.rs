//! Shield configuration types and builder

use crate::button::Button;
pub use crate::error::BuilderError;
use crate::pins::ShieldPins;

/// Ladder band centres for the stock shield, 10-bit ADC units
///
/// Ordered RIGHT, UP, DOWN, LEFT, SELECT.
pub const DEFAULT_LEVELS: [u16; 5] = [0, 120, 280, 480, 720];

/// Acceptance half-width around each band centre, 10-bit ADC units
pub const DEFAULT_HYSTERESIS: u16 = 30;

/// Band centres from the shield's factory documentation
///
/// RIGHT 0.00V, UP 0.71V, DOWN 1.61V, LEFT 2.47V, SELECT 3.62V at 5V reference.
pub const LEGACY_LEVELS: [u16; 5] = [0, 145, 329, 505, 741];

/// Hysteresis used with [`LEGACY_LEVELS`]
pub const LEGACY_HYSTERESIS: u16 = 10;

/// Default ADC reference voltage in millivolts
pub const DEFAULT_VREF_MV: u16 = 5000;

/// ADC sample width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// 8-bit samples, 0..=255
    Bits8,
    /// 10-bit samples, 0..=1023
    #[default]
    Bits10,
    /// 12-bit samples, 0..=4095
    Bits12,
}

impl Resolution {
    /// Sample width in bits
    pub const fn bits(self) -> u8 {
        match self {
            Resolution::Bits8 => 8,
            Resolution::Bits10 => 10,
            Resolution::Bits12 => 12,
        }
    }

    /// Largest code the ADC can return
    pub const fn max_code(self) -> u16 {
        (1 << self.bits()) - 1
    }

    /// Convert a raw sample to millivolts against `vref_mv`
    ///
    /// Full scale (`max_code`) maps to `vref_mv`. Samples above full scale
    /// are not clamped.
    pub const fn to_millivolts(self, raw: u16, vref_mv: u16) -> u32 {
        let max = self.max_code() as u32;
        (raw as u32 * vref_mv as u32 + max / 2) / max
    }

    /// Convert a sample from this resolution to `to`, rounding to nearest
    ///
    /// Results that don't fit in a `u16` saturate at `u16::MAX`.
    pub const fn convert(self, raw: u16, to: Resolution) -> u16 {
        let from_max = self.max_code() as u32;
        let to_max = to.max_code() as u32;
        let scaled = (raw as u32 * to_max + from_max / 2) / from_max;
        if scaled > u16::MAX as u32 {
            u16::MAX
        } else {
            scaled as u16
        }
    }
}

/// Keypad threshold table
///
/// Five band centres in ladder order plus the hysteresis half-width, all in
/// units of `resolution`. Tables built through [`Thresholds::new`] or the
/// [`Builder`] are strictly increasing with every adjacent gap wider than
/// `2 * hysteresis`, so no sample can fall into two bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    levels: [u16; 5],
    hysteresis: u16,
    resolution: Resolution,
}

const _: () = assert!(Thresholds::DEFAULT.validate().is_ok());
const _: () = assert!(Thresholds::LEGACY.validate().is_ok());

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Thresholds {
    /// Stock shield table
    pub const DEFAULT: Self =
        Self::new_unchecked(DEFAULT_LEVELS, DEFAULT_HYSTERESIS, Resolution::Bits10);

    /// Factory-documented table
    pub const LEGACY: Self =
        Self::new_unchecked(LEGACY_LEVELS, LEGACY_HYSTERESIS, Resolution::Bits10);

    /// Create a validated table
    ///
    /// # Errors
    ///
    /// See [`Thresholds::validate`].
    pub const fn new(
        levels: [u16; 5],
        hysteresis: u16,
        resolution: Resolution,
    ) -> Result<Self, BuilderError> {
        let thresholds = Self::new_unchecked(levels, hysteresis, resolution);
        match thresholds.validate() {
            Ok(()) => Ok(thresholds),
            Err(e) => Err(e),
        }
    }

    /// Create a table without checking band separation
    ///
    /// Decoding an unvalidated table is still deterministic: when bands
    /// overlap the nearest centre wins, and the lower one on a tie.
    pub const fn new_unchecked(levels: [u16; 5], hysteresis: u16, resolution: Resolution) -> Self {
        Self {
            levels,
            hysteresis,
            resolution,
        }
    }

    /// Check band ordering, separation, and range
    ///
    /// # Errors
    ///
    /// - `BuilderError::ThresholdsNotIncreasing` if a centre is not above its predecessor
    /// - `BuilderError::BandsOverlap` if two adjacent centres are `2 * hysteresis` or less apart
    /// - `BuilderError::ThresholdOutOfRange` if a band reaches past the ADC's largest code
    pub const fn validate(&self) -> Result<(), BuilderError> {
        let max = self.resolution.max_code();
        let mut index = 0;
        while index < self.levels.len() {
            let value = self.levels[index];
            if value as u32 + self.hysteresis as u32 > max as u32 {
                return Err(BuilderError::ThresholdOutOfRange { index, value, max });
            }
            if index > 0 {
                let previous = self.levels[index - 1];
                if value <= previous {
                    return Err(BuilderError::ThresholdsNotIncreasing { index });
                }
                let gap = value - previous;
                if gap as u32 <= 2 * self.hysteresis as u32 {
                    return Err(BuilderError::BandsOverlap {
                        index,
                        gap,
                        hysteresis: self.hysteresis,
                    });
                }
            }
            index += 1;
        }
        Ok(())
    }

    /// Band centres in ladder order
    pub const fn levels(&self) -> &[u16; 5] {
        &self.levels
    }

    pub const fn hysteresis(&self) -> u16 {
        self.hysteresis
    }

    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Band centre for `button`, `None` for [`Button::None`]
    pub const fn level(&self, button: Button) -> Option<u16> {
        match button {
            Button::None => None,
            pressed => Some(self.levels[pressed.code() as usize - 1]),
        }
    }

    /// Inclusive sample range accepted for `button`
    pub const fn band(&self, button: Button) -> Option<(u16, u16)> {
        match self.level(button) {
            Some(centre) => Some((
                centre.saturating_sub(self.hysteresis),
                centre.saturating_add(self.hysteresis),
            )),
            None => None,
        }
    }

    /// Express the table in another ADC resolution
    ///
    /// # Errors
    ///
    /// The source table is validated first. Rounding can squeeze narrow
    /// gaps, so the rescaled table is validated again and any violation is
    /// returned.
    pub fn rescale(&self, to: Resolution) -> Result<Self, BuilderError> {
        self.validate()?;
        let from = self.resolution;
        let levels = self.levels.map(|level| from.convert(level, to));
        Self::new(levels, from.convert(self.hysteresis, to), to)
    }
}

/// Shield configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Pin topology
    pub pins: ShieldPins,
    /// Keypad threshold table
    pub thresholds: Thresholds,
    /// ADC reference voltage in millivolts
    pub vref_mv: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pins: ShieldPins::default(),
            thresholds: Thresholds::DEFAULT,
            vref_mv: DEFAULT_VREF_MV,
        }
    }
}

/// Builder for constructing shield configuration
///
/// Every setting defaults to the stock shield.
///
/// # Example
///
/// ```
/// use lcd_keypad_shield::{Builder, DigitalPin, Resolution, ShieldPins};
///
/// let config = Builder::new()
///     .pins(ShieldPins {
///         backlight: DigitalPin(3),
///         ..ShieldPins::default()
///     })
///     .resolution(Resolution::Bits8)
///     .levels([0, 36, 82, 126, 185])
///     .hysteresis(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.thresholds.levels()[4], 185);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    /// Pin topology
    pins: ShieldPins,
    /// Band centres in ladder order
    levels: [u16; 5],
    /// Band half-width
    hysteresis: u16,
    /// Units of `levels` and `hysteresis`
    resolution: Resolution,
    /// ADC reference voltage
    vref_mv: u16,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            pins: ShieldPins::default(),
            levels: DEFAULT_LEVELS,
            hysteresis: DEFAULT_HYSTERESIS,
            resolution: Resolution::Bits10,
            vref_mv: DEFAULT_VREF_MV,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pin topology
    pub fn pins(mut self, pins: ShieldPins) -> Self {
        self.pins = pins;
        self
    }

    /// Set band centres (RIGHT, UP, DOWN, LEFT, SELECT)
    pub fn levels(mut self, levels: [u16; 5]) -> Self {
        self.levels = levels;
        self
    }

    /// Set band half-width
    pub fn hysteresis(mut self, hysteresis: u16) -> Self {
        self.hysteresis = hysteresis;
        self
    }

    /// Set the ADC resolution the levels are expressed in
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Take levels, hysteresis and resolution from an existing table
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.levels = thresholds.levels;
        self.hysteresis = thresholds.hysteresis;
        self.resolution = thresholds.resolution;
        self
    }

    /// Set ADC reference voltage
    pub fn vref_mv(mut self, vref_mv: u16) -> Self {
        self.vref_mv = vref_mv;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - Any threshold error from [`Thresholds::validate`]
    /// - `BuilderError::PinConflict` if two digital functions share a pin
    /// - `BuilderError::ZeroReference` if the reference voltage is zero
    pub fn build(self) -> Result<Config, BuilderError> {
        let thresholds = Thresholds::new(self.levels, self.hysteresis, self.resolution)?;
        if let Some(pin) = self.pins.digital_conflict() {
            return Err(BuilderError::PinConflict { pin });
        }
        if self.vref_mv == 0 {
            return Err(BuilderError::ZeroReference);
        }
        Ok(Config {
            pins: self.pins,
            thresholds,
            vref_mv: self.vref_mv,
        })
    }
}

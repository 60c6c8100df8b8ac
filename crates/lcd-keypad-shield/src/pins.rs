//! Shield pin identifiers
//!
//! Pin numbers are plain integers in the board's own numbering, wrapped so
//! an analog input can't be handed to something expecting a digital line.
//! The full topology is a [`ShieldPins`] value carried in
//! [`Config`](crate::config::Config), so a different shield layout is a
//! configuration change rather than a recompile of the decoding logic.

/// Stock pin assignments for the LCD & keypad shield
pub mod defaults {
    use super::{AnalogPin, DigitalPin};

    // ----- Analog inputs -----
    pub const BUTTON_ADC: AnalogPin = AnalogPin(0); // A0 - button ladder
    pub const BATTERY_ADC: AnalogPin = AnalogPin(30); // A30 - battery measurement
    pub const INPUT_ADC: AnalogPin = AnalogPin(31); // A31 - voltage input measurement

    // ----- LCD -----
    pub const LCD_D4: DigitalPin = DigitalPin(4);
    pub const LCD_D5: DigitalPin = DigitalPin(5);
    pub const LCD_D6: DigitalPin = DigitalPin(6);
    pub const LCD_D7: DigitalPin = DigitalPin(7);
    pub const LCD_RS: DigitalPin = DigitalPin(8);
    pub const LCD_EN: DigitalPin = DigitalPin(9);

    // ----- Backlight -----
    // Early shield revisions used D3; this board is wired to D10.
    pub const BACKLIGHT: DigitalPin = DigitalPin(10);
}

/// Analog input pin number (`A<n>`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnalogPin(pub u8);

/// Digital pin number (`D<n>`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DigitalPin(pub u8);

impl core::fmt::Display for AnalogPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "A{}", self.0)
    }
}

impl core::fmt::Display for DigitalPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "D{}", self.0)
    }
}

/// LCD controller lines in 4-bit mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcdPins {
    /// Register select
    pub rs: DigitalPin,
    /// Enable strobe
    pub en: DigitalPin,
    /// Data lines D4..D7, in bus order
    pub data: [DigitalPin; 4],
}

impl Default for LcdPins {
    fn default() -> Self {
        Self {
            rs: defaults::LCD_RS,
            en: defaults::LCD_EN,
            data: [
                defaults::LCD_D4,
                defaults::LCD_D5,
                defaults::LCD_D6,
                defaults::LCD_D7,
            ],
        }
    }
}

/// Hardware topology of the shield
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShieldPins {
    /// Resistor-ladder input for the five buttons
    pub button_adc: AnalogPin,
    /// Battery voltage measurement input
    pub battery_adc: AnalogPin,
    /// Supply input voltage measurement
    pub input_adc: AnalogPin,
    /// Backlight enable, active high
    pub backlight: DigitalPin,
    /// LCD controller lines
    pub lcd: LcdPins,
}

impl Default for ShieldPins {
    fn default() -> Self {
        Self {
            button_adc: defaults::BUTTON_ADC,
            battery_adc: defaults::BATTERY_ADC,
            input_adc: defaults::INPUT_ADC,
            backlight: defaults::BACKLIGHT,
            lcd: LcdPins::default(),
        }
    }
}

impl ShieldPins {
    /// Digital lines claimed by the shield, backlight first
    pub fn digital(&self) -> [DigitalPin; 7] {
        let [d4, d5, d6, d7] = self.lcd.data;
        [self.backlight, self.lcd.rs, self.lcd.en, d4, d5, d6, d7]
    }

    /// First digital pin claimed by more than one shield function
    pub fn digital_conflict(&self) -> Option<DigitalPin> {
        let pins = self.digital();
        pins.iter()
            .enumerate()
            .find(|(i, pin)| pins[i + 1..].contains(pin))
            .map(|(_, pin)| *pin)
    }
}

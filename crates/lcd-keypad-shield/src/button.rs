//! Keypad button codes

/// Decoded keypad state at one sampling instant
///
/// The discriminants are the shield's numeric button codes, so
/// `Button::Up as u8 == 2` just as callers of the original board
/// library expect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    /// No button pressed, or the sample fell outside every band
    #[default]
    None = 0,
    Right = 1,
    Up = 2,
    Down = 3,
    Left = 4,
    Select = 5,
}

impl Button {
    /// The five physical buttons in resistor-ladder order (lowest voltage first)
    pub const LADDER: [Button; 5] = [
        Button::Right,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Select,
    ];

    /// Numeric button code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns true for every variant except [`Button::None`]
    pub const fn is_pressed(self) -> bool {
        !matches!(self, Button::None)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Button::None => "None",
            Button::Right => "Right",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Select => "Select",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when converting an unknown numeric code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidButtonCode(pub u8);

impl core::fmt::Display for InvalidButtonCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid button code {}", self.0)
    }
}

impl core::error::Error for InvalidButtonCode {}

impl TryFrom<u8> for Button {
    type Error = InvalidButtonCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Button::None),
            1 => Ok(Button::Right),
            2 => Ok(Button::Up),
            3 => Ok(Button::Down),
            4 => Ok(Button::Left),
            5 => Ok(Button::Select),
            other => Err(InvalidButtonCode(other)),
        }
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        button.code()
    }
}

/// Keypad edge events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(Button),
    Release(Button),
}

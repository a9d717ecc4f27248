use std::fmt::{self, Display, Formatter};

use crate::Symbol;

/// A four-channel color (red, green, blue, white) for an addressable light array.
///
/// # Examples
///
/// ```
/// use beacon_core::Rgbw;
///
/// let color = Rgbw::new(255, 128, 0, 10);
/// assert_eq!(Rgbw::new(128, 64, 0, 5), color.scaled(128));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rgbw {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// White channel.
    pub w: u8,
}

impl Rgbw {
    /// All channels off.
    pub const OFF: Rgbw = Rgbw::new(0, 0, 0, 0);
    /// Full blue.
    pub const BLUE: Rgbw = Rgbw::new(0, 0, 255, 0);
    /// Full red.
    pub const RED: Rgbw = Rgbw::new(255, 0, 0, 0);

    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Rgbw { r, g, b, w }
    }

    /// Whether every channel is zero.
    pub fn is_off(&self) -> bool {
        *self == Rgbw::OFF
    }

    /// Scales every channel by `brightness / 255`.
    pub fn scaled(&self, brightness: u8) -> Self {
        let scale = |channel: u8| (u16::from(channel) * u16::from(brightness) / 255) as u8;
        Rgbw::new(scale(self.r), scale(self.g), scale(self.b), scale(self.w))
    }
}

impl Display for Rgbw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.w)
    }
}

/// Colors shown on the light array while each kind of pulse is active.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SignalPalette {
    /// Color while a dot is lit.
    pub dot: Rgbw,
    /// Color while a dash is lit.
    pub dash: Rgbw,
}

impl SignalPalette {
    /// Color for a pulse of the given kind.
    pub fn color(&self, symbol: Symbol) -> Rgbw {
        match symbol {
            Symbol::Dot => self.dot,
            Symbol::Dash => self.dash,
        }
    }

    /// Color between pulses.
    pub fn off(&self) -> Rgbw {
        Rgbw::OFF
    }
}

impl Default for SignalPalette {
    /// Blue dots and red dashes.
    fn default() -> Self {
        SignalPalette {
            dot: Rgbw::BLUE,
            dash: Rgbw::RED,
        }
    }
}

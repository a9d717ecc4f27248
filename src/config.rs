use thiserror::Error;

use crate::core::{PinId, SignalPalette, TimingConfig, TimingError};

/// Errors related to an [`IndicatorConfig`].
#[derive(Debug, Error, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The light array was configured with zero pixels.
    #[error("Pixel count must be at least 1")]
    NoPixels,

    /// The color output doesn't have the configured number of pixels.
    #[error("Pixel count mismatch: Expected {}, got {}", expected, actual)]
    PixelCountMismatch {
        /// The configured pixel count.
        expected: usize,

        /// The pixel count reported by the color output.
        actual: usize,
    },

    /// The color output applies a different brightness than configured.
    #[error("Brightness mismatch: Expected {}, got {}", expected, actual)]
    BrightnessMismatch {
        /// The configured brightness.
        expected: u8,

        /// The brightness reported by the color output.
        actual: u8,
    },

    /// A timing value was invalid.
    #[error("Invalid timing")]
    Timing {
        /// The underlying timing error.
        #[from]
        source: TimingError,
    },
}

/// Everything needed to describe an indicator: wiring, light array size, and signal style.
///
/// Defaults match a laser on GPIO 23 and a strip of 7 RGBW pixels on GPIO 18 at full
/// brightness, signaling with a 200 ms unit, blue dots and red dashes.
///
/// Pin identifiers are only descriptive here; they are logged on startup but it is up to
/// the platform setup code to actually claim those pins.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use beacon::IndicatorConfig;
/// use beacon::core::TimingConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let config = IndicatorConfig {
///     pixel_count: 12,
///     timing: TimingConfig::new(Duration::from_millis(80))?,
///     ..IndicatorConfig::default()
/// };
/// config.validate()?;
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IndicatorConfig {
    /// Pin driving the binary output.
    pub laser_pin: PinId,

    /// Data pin of the light array.
    pub pixel_pin: PinId,

    /// Number of pixels in the light array.
    pub pixel_count: usize,

    /// Brightness applied by the light array driver, from 0 (off) to 255 (full).
    ///
    /// The driver is built by the caller, so it must be given this same value; an output
    /// reporting a different brightness is rejected when the indicator is created.
    pub brightness: u8,

    /// Signal timing.
    pub timing: TimingConfig,

    /// Colors for dots and dashes.
    pub palette: SignalPalette,
}

impl IndicatorConfig {
    /// Checks that the configuration describes a usable indicator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPixels`] if `pixel_count` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_count == 0 {
            return Err(ConfigError::NoPixels);
        }
        Ok(())
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            laser_pin: PinId(23),
            pixel_pin: PinId(18),
            pixel_count: 7,
            brightness: 255,
            timing: TimingConfig::default(),
            palette: SignalPalette::default(),
        }
    }
}

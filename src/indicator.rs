use log::info;
use thiserror::Error;

use crate::blink::BlinkSignal;
use crate::config::{ConfigError, IndicatorConfig};
use crate::core::{BinaryOutput, ColorOutput, Delay, Event, SignalEncoder, SymbolTable, ThreadDelay, TimingConfig};
use crate::player::{lamp_error, pixels_error, PlaybackError, SignalPlayer};

/// Errors that can occur while setting up an [`Indicator`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SetupError {
    /// The configuration was rejected.
    #[error("Invalid indicator configuration")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// The outputs could not be switched off.
    #[error("Failed to reset indicator outputs")]
    Device {
        /// The underlying playback error.
        #[from]
        source: PlaybackError,
    },
}

/// A laser (or other single light) paired with an RGBW light array, used to send messages
/// in Morse code.
///
/// The indicator exclusively owns both outputs and the delay, so messages are always
/// played one after another. Each call blocks until its signal is done.
///
/// # Examples
///
/// ```no_run
/// use beacon::{Indicator, IndicatorConfig};
/// use beacon::core::ThreadDelay;
/// use beacon_testing::{VirtualLamp, VirtualPixelStrip};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let config = IndicatorConfig::default();
/// let mut indicator = Indicator::new(
///     config,
///     VirtualLamp::new(),
///     VirtualPixelStrip::new(config.pixel_count),
///     ThreadDelay,
/// )?;
///
/// // Three half-second blinks, then a message.
/// indicator.blink_for(0.5, 0.5, Some(3))?;
/// indicator.send_morse("SOS")?;
/// #
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Indicator<L, P, D = ThreadDelay> {
    config: IndicatorConfig,
    table: Option<SymbolTable>,
    lamp: L,
    pixels: P,
    delay: D,
}

impl<L, P, D> Indicator<L, P, D>
where
    L: BinaryOutput,
    P: ColorOutput,
    D: Delay,
{
    /// Creates an indicator from its configuration and devices, and switches both outputs off.
    ///
    /// # Errors
    ///
    /// Returns:
    /// * [`SetupError::Config`] if the configuration is invalid or doesn't match the color output
    ///   (pixel count, or brightness for outputs that report one).
    /// * [`SetupError::Device`] if either output fails to switch off.
    ///
    /// # Examples
    ///
    /// ```
    /// use beacon::core::Rgbw;
    /// use beacon::{Indicator, IndicatorConfig};
    /// use beacon_testing::{RecordingDelay, VirtualLamp, VirtualPixelStrip};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// #
    /// let indicator = Indicator::new(
    ///     IndicatorConfig::default(),
    ///     VirtualLamp::new(),
    ///     VirtualPixelStrip::new(7),
    ///     RecordingDelay::new(),
    /// )?;
    /// assert!(!indicator.lamp().is_on());
    /// assert_eq!(&[Rgbw::OFF; 7], indicator.pixels().shown());
    /// #
    /// # Ok(()) }
    /// ```
    pub fn new(config: IndicatorConfig, lamp: L, pixels: P, delay: D) -> Result<Self, SetupError> {
        config.validate()?;
        if pixels.pixel_count() != config.pixel_count {
            return Err(ConfigError::PixelCountMismatch {
                expected: config.pixel_count,
                actual: pixels.pixel_count(),
            }
            .into());
        }
        if let Some(actual) = pixels.brightness() {
            if actual != config.brightness {
                return Err(ConfigError::BrightnessMismatch {
                    expected: config.brightness,
                    actual,
                }
                .into());
            }
        }

        let mut indicator = Indicator {
            config,
            table: None,
            lamp,
            pixels,
            delay,
        };
        indicator.reset()?;

        info!(
            "Indicator ready: laser on pin {}, {} pixels on pin {} at brightness {}",
            config.laser_pin, config.pixel_count, config.pixel_pin, config.brightness
        );
        Ok(indicator)
    }

    /// Replaces the standard Morse table with a custom one.
    pub fn with_symbol_table(mut self, table: SymbolTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Returns the table used to encode messages.
    pub fn symbol_table(&self) -> &SymbolTable {
        match self.table {
            Some(ref table) => table,
            None => SymbolTable::standard(),
        }
    }

    /// Returns a reference to the binary output.
    pub fn lamp(&self) -> &L {
        &self.lamp
    }

    /// Returns a reference to the color output.
    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    /// Returns a reference to the delay.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Consumes the indicator, returning its devices.
    pub fn into_parts(self) -> (L, P, D) {
        (self.lamp, self.pixels, self.delay)
    }

    /// Turns the binary output on.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Lamp`] if the output fails.
    pub fn turn_on(&mut self) -> Result<(), PlaybackError> {
        self.lamp.activate().map_err(lamp_error)
    }

    /// Turns the binary output off.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Lamp`] if the output fails.
    pub fn turn_off(&mut self) -> Result<(), PlaybackError> {
        self.lamp.deactivate().map_err(lamp_error)
    }

    /// Turns the binary output off and blanks every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Lamp`] or [`PlaybackError::Pixels`] if either output fails.
    pub fn reset(&mut self) -> Result<(), PlaybackError> {
        self.turn_off()?;
        self.pixels.fill(self.config.palette.off()).map_err(pixels_error)
    }

    /// Runs a blink pattern on the binary output.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Lamp`] if the output fails.
    pub fn blink(&mut self, signal: &BlinkSignal) -> Result<(), PlaybackError> {
        signal.run(&mut self.lamp, &mut self.delay)
    }

    /// Blinks the binary output `count` times (or indefinitely if `None`) with on and off
    /// durations given in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] if a duration is invalid, or [`SetupError::Device`]
    /// if the output fails.
    pub fn blink_for(&mut self, on: f64, off: f64, count: Option<u32>) -> Result<(), SetupError> {
        let signal = BlinkSignal::from_secs_f64(on, off, count).map_err(ConfigError::from)?;
        Ok(self.blink(&signal)?)
    }

    /// Encodes a message with this indicator's symbol table.
    pub fn encode(&self, message: &str) -> Vec<Event> {
        SignalEncoder::new(self.symbol_table()).encode(message)
    }

    /// Sends a message in Morse code using the configured timing.
    ///
    /// Characters without a Morse representation are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] if either output fails; the rest of the message is abandoned.
    pub fn send_morse(&mut self, message: &str) -> Result<(), PlaybackError> {
        let timing = self.config.timing;
        self.send_morse_with(message, timing)
    }

    /// Sends a message in Morse code using the given timing instead of the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] if either output fails; the rest of the message is abandoned.
    pub fn send_morse_with(&mut self, message: &str, timing: TimingConfig) -> Result<(), PlaybackError> {
        let events = self.encode(message);
        self.play_with(&events, timing)
    }

    /// Plays a pre-encoded sequence of events using the configured timing.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] if either output fails.
    pub fn play(&mut self, events: &[Event]) -> Result<(), PlaybackError> {
        let timing = self.config.timing;
        self.play_with(events, timing)
    }

    fn play_with(&mut self, events: &[Event], timing: TimingConfig) -> Result<(), PlaybackError> {
        SignalPlayer::new(&mut self.lamp, &mut self.pixels, &mut self.delay, timing)
            .with_palette(self.config.palette)
            .play(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgbw;
    use beacon_testing::{DeviceCall, RecordingDelay, Timeline, VirtualLamp, VirtualPixelStrip};

    fn indicator(timeline: &Timeline) -> Indicator<VirtualLamp, VirtualPixelStrip, RecordingDelay> {
        Indicator::new(
            IndicatorConfig::default(),
            VirtualLamp::with_timeline(timeline),
            VirtualPixelStrip::with_timeline(7, timeline),
            RecordingDelay::with_timeline(timeline),
        )
        .unwrap()
    }

    #[test]
    fn new_switches_outputs_off() {
        let timeline = Timeline::new();
        let _ = indicator(&timeline);
        assert_eq!(
            vec![DeviceCall::Deactivate, DeviceCall::SetColor(Rgbw::OFF), DeviceCall::Show],
            timeline.calls()
        );
    }

    #[test]
    fn pixel_count_mismatch() {
        let result = Indicator::new(
            IndicatorConfig::default(),
            VirtualLamp::new(),
            VirtualPixelStrip::new(8),
            RecordingDelay::new(),
        );
        assert!(matches!(
            result,
            Err(SetupError::Config {
                source: ConfigError::PixelCountMismatch { expected: 7, actual: 8 }
            })
        ));
    }

    #[test]
    fn no_pixels() {
        let config = IndicatorConfig {
            pixel_count: 0,
            ..IndicatorConfig::default()
        };
        let result = Indicator::new(config, VirtualLamp::new(), VirtualPixelStrip::new(0), RecordingDelay::new());
        assert!(matches!(result, Err(SetupError::Config { source: ConfigError::NoPixels })));
    }

    #[test]
    fn reset_failure() {
        let result = Indicator::new(
            IndicatorConfig::default(),
            VirtualLamp::new(),
            VirtualPixelStrip::new(7).failing(),
            RecordingDelay::new(),
        );
        assert!(matches!(
            result,
            Err(SetupError::Device {
                source: PlaybackError::Pixels { .. }
            })
        ));
    }

    #[test]
    fn turn_on_and_off() {
        let timeline = Timeline::new();
        let mut indicator = indicator(&timeline);
        timeline.clear();

        indicator.turn_on().unwrap();
        assert!(indicator.lamp().is_on());
        indicator.turn_off().unwrap();
        assert!(!indicator.lamp().is_on());
        assert_eq!(vec![DeviceCall::Activate, DeviceCall::Deactivate], timeline.calls());
    }

    #[test]
    fn blink_for_rejects_bad_durations() {
        let timeline = Timeline::new();
        let mut indicator = indicator(&timeline);
        timeline.clear();

        assert!(matches!(
            indicator.blink_for(-1.0, 0.5, Some(1)),
            Err(SetupError::Config { source: ConfigError::Timing { .. } })
        ));
        assert!(timeline.is_empty());
    }

    #[test]
    fn custom_table() {
        let timeline = Timeline::new();
        let table = SymbolTable::from_patterns(vec![('#', "-")]).unwrap();
        let mut indicator = indicator(&timeline).with_symbol_table(table);
        timeline.clear();

        indicator.send_morse("#A").unwrap();
        assert_eq!(1, indicator.lamp().activations());
        assert!(indicator.symbol_table().lookup('A').is_empty());
    }

    #[test]
    fn standard_table_by_default() {
        let timeline = Timeline::new();
        let indicator = indicator(&timeline);
        assert!(std::ptr::eq(SymbolTable::standard(), indicator.symbol_table()));
    }
}

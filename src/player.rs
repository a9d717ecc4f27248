use log::{debug, info};
use thiserror::Error;

use crate::core::{render, BinaryOutput, ColorOutput, Delay, DeviceError, Event, SignalPalette, Symbol, TimingConfig};

/// Errors related to driving the output devices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaybackError {
    /// The binary output failed to turn on or off.
    #[error("Binary output failed to switch")]
    Lamp {
        /// The underlying device error.
        source: DeviceError,
    },

    /// The color output failed to update.
    #[error("Color output failed to update")]
    Pixels {
        /// The underlying device error.
        source: DeviceError,
    },
}

pub(crate) fn lamp_error(source: DeviceError) -> PlaybackError {
    PlaybackError::Lamp { source }
}

pub(crate) fn pixels_error(source: DeviceError) -> PlaybackError {
    PlaybackError::Pixels { source }
}

/// Plays a sequence of [`Event`]s on a binary output and a color output.
///
/// A player borrows its devices exclusively for as long as it lives, so only one
/// message can be playing on them at a time. Every wait blocks the calling thread;
/// playback returns once the last event (including its trailing silence) is done.
///
/// For each event:
///
/// | Event          | Device activity |
/// |----------------|-----------------|
/// | dot / dash     | lamp on, pixels to the pulse color, wait dot/dash duration, lamp off, pixels off, wait intra-symbol gap |
/// | character gap  | wait inter-character gap minus intra-symbol gap |
/// | word gap       | wait inter-word gap |
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use beacon::core::{encode, TimingConfig};
/// use beacon::SignalPlayer;
/// use beacon_testing::{RecordingDelay, VirtualLamp, VirtualPixelStrip};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut lamp = VirtualLamp::new();
/// let mut pixels = VirtualPixelStrip::new(7);
/// let mut delay = RecordingDelay::new();
///
/// let mut player = SignalPlayer::new(&mut lamp, &mut pixels, &mut delay, TimingConfig::default());
/// player.play(&encode("SOS"))?;
///
/// assert_eq!(9, lamp.activations());
/// assert_eq!(Duration::from_secs(6), delay.elapsed());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct SignalPlayer<'d> {
    lamp: &'d mut dyn BinaryOutput,
    pixels: &'d mut dyn ColorOutput,
    delay: &'d mut dyn Delay,
    timing: TimingConfig,
    palette: SignalPalette,
}

impl<'d> SignalPlayer<'d> {
    /// Creates a player using the default palette.
    pub fn new(
        lamp: &'d mut dyn BinaryOutput,
        pixels: &'d mut dyn ColorOutput,
        delay: &'d mut dyn Delay,
        timing: TimingConfig,
    ) -> Self {
        SignalPlayer {
            lamp,
            pixels,
            delay,
            timing,
            palette: SignalPalette::default(),
        }
    }

    /// Replaces the colors shown for dots and dashes.
    pub fn with_palette(mut self, palette: SignalPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the timing used for playback.
    pub fn timing(&self) -> TimingConfig {
        self.timing
    }

    /// Returns the colors used for pulses.
    pub fn palette(&self) -> SignalPalette {
        self.palette
    }

    /// Plays every event in order, blocking until done.
    ///
    /// An empty sequence returns immediately without touching the devices.
    ///
    /// # Errors
    ///
    /// Returns:
    /// * [`PlaybackError::Lamp`] if the binary output failed.
    /// * [`PlaybackError::Pixels`] if the color output failed.
    ///
    /// Playback stops at the first failure; the outputs are left in whatever state they
    /// were in when it happened.
    pub fn play(&mut self, events: &[Event]) -> Result<(), PlaybackError> {
        if events.is_empty() {
            return Ok(());
        }

        info!(
            "Playing \"{}\" over {:?}",
            render(events).trim_end(),
            self.timing.total_duration(events)
        );

        for event in events {
            debug!("Event: {:?}", event);
            match *event {
                Event::Pulse(symbol) => self.pulse(symbol)?,
                Event::CharacterGap => self.delay.wait(self.timing.character_gap_remainder()),
                Event::WordGap => self.delay.wait(self.timing.inter_word_gap()),
            }
        }
        Ok(())
    }

    /// Lights both outputs for one symbol, then goes dark for the intra-symbol gap.
    fn pulse(&mut self, symbol: Symbol) -> Result<(), PlaybackError> {
        self.lamp.activate().map_err(lamp_error)?;
        self.pixels.fill(self.palette.color(symbol)).map_err(pixels_error)?;
        self.delay.wait(self.timing.pulse(symbol));

        self.lamp.deactivate().map_err(lamp_error)?;
        self.pixels.fill(self.palette.off()).map_err(pixels_error)?;
        self.delay.wait(self.timing.intra_symbol_gap());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::time::Duration;

    use crate::core::{encode, Rgbw};

    #[derive(Debug, Default)]
    struct Log(Vec<String>);

    impl BinaryOutput for Log {
        fn activate(&mut self) -> Result<(), DeviceError> {
            self.0.push("on".into());
            Ok(())
        }

        fn deactivate(&mut self) -> Result<(), DeviceError> {
            self.0.push("off".into());
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct Strip(Vec<Rgbw>);

    impl ColorOutput for Strip {
        fn pixel_count(&self) -> usize {
            1
        }

        fn set_color(&mut self, color: Rgbw) -> Result<(), DeviceError> {
            self.0.push(color);
            Ok(())
        }

        fn show(&mut self) -> Result<(), DeviceError> {
            Err("strip unplugged".into())
        }
    }

    #[derive(Debug, Default)]
    struct Waits(Vec<Duration>);

    impl Delay for Waits {
        fn wait(&mut self, duration: Duration) {
            self.0.push(duration);
        }
    }

    #[test]
    fn gaps_only_touch_delay() {
        let mut lamp = Log::default();
        let mut strip = Strip::default();
        let mut waits = Waits::default();
        let timing = TimingConfig::new(Duration::from_millis(100)).unwrap();

        let mut player = SignalPlayer::new(&mut lamp, &mut strip, &mut waits, timing);
        player
            .play(&[Event::WordGap, Event::CharacterGap, Event::WordGap])
            .unwrap();

        assert!(lamp.0.is_empty());
        assert!(strip.0.is_empty());
        assert_eq!(
            vec![
                Duration::from_millis(700),
                Duration::from_millis(200),
                Duration::from_millis(700),
            ],
            waits.0
        );
    }

    #[test]
    fn empty_sequence() {
        let mut lamp = Log::default();
        let mut strip = Strip::default();
        let mut waits = Waits::default();

        let mut player = SignalPlayer::new(&mut lamp, &mut strip, &mut waits, TimingConfig::default());
        player.play(&encode("#$%")).unwrap();

        assert!(lamp.0.is_empty());
        assert!(strip.0.is_empty());
        assert!(waits.0.is_empty());
    }

    #[test]
    fn pixel_failure_stops_playback() {
        let mut lamp = Log::default();
        let mut strip = Strip::default();
        let mut waits = Waits::default();

        let mut player = SignalPlayer::new(&mut lamp, &mut strip, &mut waits, TimingConfig::default());
        let error = player.play(&encode("E")).unwrap_err();

        assert!(matches!(error, PlaybackError::Pixels { .. }));
        assert_eq!("strip unplugged", error.source().unwrap().to_string());
        assert_eq!(vec!["on".to_string()], lamp.0);
        assert_eq!(vec![Rgbw::BLUE], strip.0);
        assert!(waits.0.is_empty());
    }

    #[test]
    fn custom_palette() {
        let palette = SignalPalette {
            dot: Rgbw::new(0, 0, 0, 255),
            dash: Rgbw::new(0, 255, 0, 0),
        };
        let mut lamp = Log::default();
        let mut strip = Strip::default();
        let mut waits = Waits::default();

        let player = SignalPlayer::new(&mut lamp, &mut strip, &mut waits, TimingConfig::default())
            .with_palette(palette);
        assert_eq!(palette, player.palette());
        assert_eq!(TimingConfig::default(), player.timing());
    }
}

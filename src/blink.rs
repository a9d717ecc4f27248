use std::time::Duration;

use log::debug;

use crate::core::{duration_from_secs, BinaryOutput, Delay, TimingError};
use crate::player::{lamp_error, PlaybackError};

/// Toggles a binary output on and off at a fixed rhythm, independent of any message.
///
/// Each cycle turns the output on, waits the on-time, turns it off, and waits the off-time.
/// With a count, exactly that many cycles are run (zero runs none). Without one, cycles
/// repeat until the output reports an error, so callers that need to get control back
/// must pass a count.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use beacon::BlinkSignal;
/// use beacon_testing::{RecordingDelay, VirtualLamp};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let blink = BlinkSignal::from_secs_f64(0.5, 0.5, Some(3))?;
///
/// let mut lamp = VirtualLamp::new();
/// let mut delay = RecordingDelay::new();
/// blink.run(&mut lamp, &mut delay)?;
///
/// assert_eq!(3, lamp.activations());
/// assert_eq!(Duration::from_secs(3), delay.elapsed());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlinkSignal {
    on: Duration,
    off: Duration,
    count: Option<u32>,
}

impl BlinkSignal {
    /// Creates a blink pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::ZeroDuration`] if either duration is zero, or
    /// [`TimingError::TooLong`] if the whole pattern's duration can't be represented.
    pub fn new(on: Duration, off: Duration, count: Option<u32>) -> Result<Self, TimingError> {
        if on == Duration::ZERO {
            return Err(TimingError::ZeroDuration { what: "on" });
        }
        if off == Duration::ZERO {
            return Err(TimingError::ZeroDuration { what: "off" });
        }
        let too_long = TimingError::TooLong { what: "blink" };
        let cycle = on.checked_add(off).ok_or(too_long)?;
        if let Some(count) = count {
            let _ = cycle.checked_mul(count).ok_or(too_long)?;
        }
        Ok(BlinkSignal { on, off, count })
    }

    /// Creates a blink pattern from durations in (fractional) seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if either duration is not finite or not positive.
    pub fn from_secs_f64(on: f64, off: f64, count: Option<u32>) -> Result<Self, TimingError> {
        Self::new(duration_from_secs("on", on)?, duration_from_secs("off", off)?, count)
    }

    /// How long the output stays on in each cycle.
    pub fn on(&self) -> Duration {
        self.on
    }

    /// How long the output stays off in each cycle.
    pub fn off(&self) -> Duration {
        self.off
    }

    /// Number of cycles, or `None` to repeat indefinitely.
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// Total time the pattern takes, or `None` if it repeats indefinitely.
    pub fn total_duration(&self) -> Option<Duration> {
        // Overflow is ruled out in `new`.
        let count = self.count?;
        self.on.checked_add(self.off)?.checked_mul(count)
    }

    /// Runs the pattern, blocking until every cycle is done.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Lamp`] if the output fails; no further cycles are attempted.
    pub fn run(&self, lamp: &mut dyn BinaryOutput, delay: &mut dyn Delay) -> Result<(), PlaybackError> {
        match self.count {
            Some(count) => {
                debug!("Blinking {} times ({:?} on, {:?} off)", count, self.on, self.off);
                for _ in 0..count {
                    self.cycle(lamp, delay)?;
                }
                Ok(())
            }
            None => {
                debug!("Blinking until stopped ({:?} on, {:?} off)", self.on, self.off);
                loop {
                    self.cycle(lamp, delay)?;
                }
            }
        }
    }

    fn cycle(&self, lamp: &mut dyn BinaryOutput, delay: &mut dyn Delay) -> Result<(), PlaybackError> {
        lamp.activate().map_err(lamp_error)?;
        delay.wait(self.on);
        lamp.deactivate().map_err(lamp_error)?;
        delay.wait(self.off);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_testing::{DeviceCall, RecordingDelay, Timeline, VirtualLamp};
    use test_case::test_case;

    #[test]
    fn three_cycles() {
        let timeline = Timeline::new();
        let mut lamp = VirtualLamp::with_timeline(&timeline);
        let mut delay = RecordingDelay::with_timeline(&timeline);
        let half = Duration::from_millis(500);

        let blink = BlinkSignal::new(half, half, Some(3)).unwrap();
        blink.run(&mut lamp, &mut delay).unwrap();

        let cycle = [
            DeviceCall::Activate,
            DeviceCall::Wait(half),
            DeviceCall::Deactivate,
            DeviceCall::Wait(half),
        ];
        assert_eq!(cycle.repeat(3), timeline.calls());
        assert_eq!(Some(Duration::from_secs(3)), blink.total_duration());
    }

    #[test]
    fn zero_cycles() {
        let mut lamp = VirtualLamp::new();
        let mut delay = RecordingDelay::new();
        let blink = BlinkSignal::from_secs_f64(1.0, 1.0, Some(0)).unwrap();
        blink.run(&mut lamp, &mut delay).unwrap();
        assert!(lamp.timeline().is_empty());
        assert!(delay.timeline().is_empty());
    }

    #[test]
    fn unbounded_stops_on_error() {
        let mut lamp = VirtualLamp::new().failing_after(10);
        let mut delay = RecordingDelay::new();
        let blink = BlinkSignal::from_secs_f64(0.1, 0.2, None).unwrap();
        assert_eq!(None, blink.total_duration());

        let error = blink.run(&mut lamp, &mut delay).unwrap_err();
        assert!(matches!(error, PlaybackError::Lamp { .. }));
        assert_eq!(5, lamp.activations());
        assert_eq!(10, delay.timeline().len());
    }

    #[test_case(0.0, 1.0 ; "zero on")]
    #[test_case(1.0, -1.0 ; "negative off")]
    #[test_case(f64::NAN, 1.0 ; "nan on")]
    fn invalid_durations(on: f64, off: f64) {
        assert!(BlinkSignal::from_secs_f64(on, off, Some(1)).is_err());
    }

    #[test]
    fn too_long() {
        assert_eq!(
            Err(TimingError::TooLong { what: "on" }),
            BlinkSignal::from_secs_f64(1e20, 1.0, Some(1))
        );
        assert_eq!(
            Err(TimingError::TooLong { what: "blink" }),
            BlinkSignal::new(Duration::MAX, Duration::from_secs(1), None)
        );
        let half = Duration::MAX / 4;
        assert_eq!(
            Err(TimingError::TooLong { what: "blink" }),
            BlinkSignal::new(half, half, Some(3))
        );
        let blink = BlinkSignal::new(half, half, Some(2)).unwrap();
        assert_eq!(Some(half * 4), blink.total_duration());
    }

    #[test]
    fn zero_duration() {
        assert_eq!(
            Err(TimingError::ZeroDuration { what: "off" }),
            BlinkSignal::new(Duration::from_secs(1), Duration::ZERO, None)
        );
    }
}

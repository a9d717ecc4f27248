use std::time::Duration;

use thiserror::Error;

use crate::{Event, Symbol};

/// Errors related to constructing a [`TimingConfig`] or other timed signals.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimingError {
    /// A duration was zero, which would produce a zero-length wait.
    #[error("Duration for {} must be greater than zero", what)]
    ZeroDuration {
        /// Which duration was invalid.
        what: &'static str,
    },

    /// A duration in seconds was zero or negative.
    #[error("Duration for {} must be positive, got {} seconds", what, seconds)]
    NonPositive {
        /// Which duration was invalid.
        what: &'static str,

        /// The value that was provided.
        seconds: f64,
    },

    /// A duration in seconds was NaN or infinite.
    #[error("Duration for {} must be finite, got {} seconds", what, seconds)]
    NotFinite {
        /// Which duration was invalid.
        what: &'static str,

        /// The value that was provided.
        seconds: f64,
    },

    /// A duration was too long to represent, or would overflow once scaled.
    #[error("Duration for {} is too long", what)]
    TooLong {
        /// Which duration was invalid.
        what: &'static str,
    },

    /// A speed of zero words per minute was requested.
    #[error("Speed must be at least 1 word per minute")]
    ZeroWpm,
}

/// Converts (fractional) seconds to a `Duration`, rejecting values that can't be a positive wait.
///
/// `what` names the duration in the returned error.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use beacon_core::{duration_from_secs, TimingError};
///
/// assert_eq!(Ok(Duration::from_millis(500)), duration_from_secs("on", 0.5));
/// assert_eq!(Err(TimingError::ZeroDuration { what: "on" }), duration_from_secs("on", 1e-12));
/// ```
pub fn duration_from_secs(what: &'static str, seconds: f64) -> Result<Duration, TimingError> {
    if !seconds.is_finite() {
        return Err(TimingError::NotFinite { what, seconds });
    }
    if seconds <= 0.0 {
        return Err(TimingError::NonPositive { what, seconds });
    }
    let duration = Duration::try_from_secs_f64(seconds).map_err(|_| TimingError::TooLong { what })?;
    if duration == Duration::ZERO {
        return Err(TimingError::ZeroDuration { what });
    }
    Ok(duration)
}

/// Rejects a zero `Duration`.
fn nonzero(what: &'static str, duration: Duration) -> Result<Duration, TimingError> {
    if duration == Duration::ZERO {
        Err(TimingError::ZeroDuration { what })
    } else {
        Ok(duration)
    }
}

/// Durations used when playing a signal, all derived from a single unit (dot) duration.
///
/// | Element               | Length |
/// |-----------------------|--------|
/// | dot                   | 1 unit |
/// | dash                  | 3 units |
/// | gap between symbols   | 1 unit |
/// | gap between characters| 3 units |
/// | gap between words     | 7 units |
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use beacon_core::TimingConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let timing = TimingConfig::new(Duration::from_millis(100))?;
/// assert_eq!(Duration::from_millis(300), timing.dash());
/// assert_eq!(Duration::from_millis(700), timing.inter_word_gap());
///
/// // 20 WPM with PARIS timing is a 60 ms unit.
/// let timing = TimingConfig::from_wpm(20)?;
/// assert_eq!(Duration::from_millis(60), timing.unit());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimingConfig {
    unit: Duration,
}

impl TimingConfig {
    /// Default unit duration.
    pub const DEFAULT_UNIT: Duration = Duration::from_millis(200);

    /// Creates a config from a unit duration.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::ZeroDuration`] if `unit` is zero, or [`TimingError::TooLong`]
    /// if the longest derived gap can't be represented.
    pub fn new(unit: Duration) -> Result<Self, TimingError> {
        let unit = nonzero("unit", unit)?;
        if unit.checked_mul(7).is_none() {
            return Err(TimingError::TooLong { what: "unit" });
        }
        Ok(TimingConfig { unit })
    }

    /// Creates a config from a unit duration in (fractional) seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is not finite or not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use beacon_core::{TimingConfig, TimingError};
    ///
    /// assert!(TimingConfig::from_secs_f64(0.2).is_ok());
    /// assert!(matches!(TimingConfig::from_secs_f64(-1.0), Err(TimingError::NonPositive { .. })));
    /// ```
    pub fn from_secs_f64(seconds: f64) -> Result<Self, TimingError> {
        Self::new(duration_from_secs("unit", seconds)?)
    }

    /// Creates a config for a speed in words per minute, using the PARIS standard word
    /// (50 units per word).
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::ZeroWpm`] if `wpm` is zero.
    pub fn from_wpm(wpm: u32) -> Result<Self, TimingError> {
        if wpm == 0 {
            return Err(TimingError::ZeroWpm);
        }
        Self::new(Duration::from_millis(1200) / wpm)
    }

    /// Duration of a dot.
    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Duration of a dash.
    pub fn dash(&self) -> Duration {
        self.unit * 3
    }

    /// On-time for a pulse of the given kind.
    pub fn pulse(&self, symbol: Symbol) -> Duration {
        match symbol {
            Symbol::Dot => self.unit(),
            Symbol::Dash => self.dash(),
        }
    }

    /// Silence after every pulse.
    pub fn intra_symbol_gap(&self) -> Duration {
        self.unit
    }

    /// Total silence between two characters.
    pub fn inter_character_gap(&self) -> Duration {
        self.unit * 3
    }

    /// Total silence between two words.
    pub fn inter_word_gap(&self) -> Duration {
        self.unit * 7
    }

    /// Wait added by a [`Event::CharacterGap`].
    ///
    /// The intra-symbol gap after the character's last pulse has already elapsed,
    /// so only the rest of the inter-character gap is left.
    pub fn character_gap_remainder(&self) -> Duration {
        self.inter_character_gap() - self.intra_symbol_gap()
    }

    /// Total time spent on a single event during playback.
    pub fn event_duration(&self, event: &Event) -> Duration {
        match *event {
            Event::Pulse(symbol) => self.pulse(symbol) + self.intra_symbol_gap(),
            Event::CharacterGap => self.character_gap_remainder(),
            Event::WordGap => self.inter_word_gap(),
        }
    }

    /// Total time spent playing a sequence of events, saturating at `Duration::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use beacon_core::{encode, TimingConfig};
    ///
    /// let timing = TimingConfig::default();
    /// assert_eq!(Duration::from_secs(6), timing.total_duration(&encode("SOS")));
    /// ```
    pub fn total_duration(&self, events: &[Event]) -> Duration {
        events
            .iter()
            .map(|event| self.event_duration(event))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            unit: Self::DEFAULT_UNIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use test_case::test_case;

    #[test_case(1 ; "one millisecond")]
    #[test_case(60 ; "twenty wpm")]
    #[test_case(200 ; "default")]
    #[test_case(1234 ; "slow")]
    fn scaling(unit_ms: u64) {
        let unit = Duration::from_millis(unit_ms);
        let timing = TimingConfig::new(unit).unwrap();
        assert_eq!(unit, timing.unit());
        assert_eq!(unit * 3, timing.dash());
        assert_eq!(unit, timing.intra_symbol_gap());
        assert_eq!(unit * 3, timing.inter_character_gap());
        assert_eq!(unit * 7, timing.inter_word_gap());
        assert_eq!(unit * 2, timing.character_gap_remainder());
    }

    #[test]
    fn default_unit() {
        assert_eq!(Duration::from_millis(200), TimingConfig::default().unit());
        assert_eq!(TimingConfig::default(), TimingConfig::from_secs_f64(0.2).unwrap());
    }

    #[test]
    fn rejects_invalid() {
        assert_eq!(
            Err(TimingError::ZeroDuration { what: "unit" }),
            TimingConfig::new(Duration::ZERO)
        );
        assert_eq!(
            Err(TimingError::NonPositive { what: "unit", seconds: 0.0 }),
            TimingConfig::from_secs_f64(0.0)
        );
        assert_eq!(
            Err(TimingError::NonPositive { what: "unit", seconds: -0.5 }),
            TimingConfig::from_secs_f64(-0.5)
        );
        assert!(matches!(
            TimingConfig::from_secs_f64(f64::NAN),
            Err(TimingError::NotFinite { .. })
        ));
        assert!(matches!(
            TimingConfig::from_secs_f64(f64::INFINITY),
            Err(TimingError::NotFinite { .. })
        ));
        assert_eq!(
            Err(TimingError::ZeroDuration { what: "unit" }),
            TimingConfig::from_secs_f64(1e-12)
        );
        assert_eq!(Err(TimingError::ZeroWpm), TimingConfig::from_wpm(0));
    }

    #[test]
    fn rejects_too_long() {
        assert_eq!(
            Err(TimingError::TooLong { what: "unit" }),
            TimingConfig::from_secs_f64(1e20)
        );
        assert_eq!(
            Err(TimingError::TooLong { what: "unit" }),
            TimingConfig::new(Duration::MAX)
        );
        assert_eq!(
            Err(TimingError::TooLong { what: "unit" }),
            TimingConfig::new(Duration::MAX / 6)
        );
        assert_eq!(Err(TimingError::TooLong { what: "on" }), duration_from_secs("on", 1e20));
    }

    #[test]
    fn longest_unit() {
        let unit = Duration::MAX / 7;
        let timing = TimingConfig::new(unit).unwrap();
        assert_eq!(unit * 7, timing.inter_word_gap());
        assert_eq!(unit * 3, timing.event_duration(&Event::Pulse(Symbol::Dash)) - unit);
        assert_eq!(Duration::MAX, timing.total_duration(&encode("E E")));
    }

    #[test]
    fn wpm() {
        assert_eq!(Duration::from_millis(100), TimingConfig::from_wpm(12).unwrap().unit());
        assert_eq!(Duration::from_millis(1200), TimingConfig::from_wpm(1).unwrap().unit());
    }

    #[test]
    fn event_durations() {
        let timing = TimingConfig::new(Duration::from_millis(10)).unwrap();
        assert_eq!(Duration::from_millis(20), timing.event_duration(&Event::Pulse(Symbol::Dot)));
        assert_eq!(Duration::from_millis(40), timing.event_duration(&Event::Pulse(Symbol::Dash)));
        assert_eq!(Duration::from_millis(20), timing.event_duration(&Event::CharacterGap));
        assert_eq!(Duration::from_millis(70), timing.event_duration(&Event::WordGap));
    }

    #[test]
    fn total_durations() {
        let timing = TimingConfig::new(Duration::from_millis(10)).unwrap();
        assert_eq!(Duration::ZERO, timing.total_duration(&[]));
        // A: dot+gap (2) + dash+gap (4) + char gap (2) = 8 units
        assert_eq!(Duration::from_millis(80), timing.total_duration(&encode("A")));
        // A B: 8 + 7 + (4 + 2 + 2 + 2 + 2) = 27 units
        assert_eq!(Duration::from_millis(270), timing.total_duration(&encode("A B")));
    }
}

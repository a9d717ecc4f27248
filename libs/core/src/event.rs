use std::fmt::{self, Display, Formatter};

use crate::Symbol;

/// A single step of an encoded signal.
///
/// A message compiles to an ordered, finite sequence of events, which is then
/// played once and discarded.
///
/// # Examples
///
/// ```
/// use beacon_core::{Event, Symbol};
///
/// let events = [Event::Pulse(Symbol::Dot), Event::Pulse(Symbol::Dash), Event::CharacterGap];
/// assert_eq!(".- ", beacon_core::render(&events));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// Light up for the duration of the symbol, then pause for the intra-symbol gap.
    Pulse(Symbol),
    /// Extra silence after the last pulse of a character.
    CharacterGap,
    /// Silence between words.
    WordGap,
}

impl Event {
    /// Whether this event lights the outputs.
    pub fn is_pulse(&self) -> bool {
        matches!(*self, Event::Pulse(_))
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Event::Pulse(symbol) => write!(f, "{}", symbol),
            Event::CharacterGap => write!(f, " "),
            Event::WordGap => write!(f, "/ "),
        }
    }
}

/// Renders a sequence of events as conventional dot/dash text, mostly for logging.
pub fn render(events: &[Event]) -> String {
    events.iter().map(Event::to_string).collect()
}

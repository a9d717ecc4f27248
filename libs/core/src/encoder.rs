use log::trace;

use crate::{Event, SymbolTable};

/// Translates text into a sequence of [`Event`]s using a [`SymbolTable`].
///
/// Encoding is pure: the output depends only on the message and the table, so
/// the same message always produces the same events. The whole message is uppercased
/// before lookup, so a letter like `ß` is sent as `SS`.
///
/// * A space produces a single [`Event::WordGap`].
/// * A mapped character produces one [`Event::Pulse`] per symbol followed by an [`Event::CharacterGap`].
/// * Anything else is skipped without producing any events.
///
/// # Examples
///
/// ```
/// use beacon_core::{Event, SignalEncoder, Symbol};
///
/// let encoder = SignalEncoder::default();
/// let events = encoder.encode("e t");
/// assert_eq!(
///     vec![
///         Event::Pulse(Symbol::Dot),
///         Event::CharacterGap,
///         Event::WordGap,
///         Event::Pulse(Symbol::Dash),
///         Event::CharacterGap,
///     ],
///     events
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignalEncoder<'t> {
    table: &'t SymbolTable,
}

impl<'t> SignalEncoder<'t> {
    /// Creates an encoder backed by the given table.
    pub fn new(table: &'t SymbolTable) -> Self {
        SignalEncoder { table }
    }

    /// Returns the table used for lookups.
    pub fn table(&self) -> &'t SymbolTable {
        self.table
    }

    /// Encodes a message into events.
    pub fn encode(&self, message: &str) -> Vec<Event> {
        let mut events = Vec::new();
        for character in message.chars().flat_map(char::to_uppercase) {
            if character == ' ' {
                events.push(Event::WordGap);
                continue;
            }

            let symbols = self.table.lookup(character);
            if symbols.is_empty() {
                trace!("Skipping unmapped character {:?}", character);
                continue;
            }

            events.extend(symbols.iter().copied().map(Event::Pulse));
            events.push(Event::CharacterGap);
        }
        events
    }
}

impl Default for SignalEncoder<'static> {
    /// Creates an encoder backed by [`SymbolTable::standard`].
    fn default() -> Self {
        SignalEncoder::new(SymbolTable::standard())
    }
}

/// Encodes a message with the standard table.
pub fn encode(message: &str) -> Vec<Event> {
    SignalEncoder::default().encode(message)
}

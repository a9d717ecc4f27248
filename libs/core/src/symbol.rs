use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use lazy_static::lazy_static;
use thiserror::Error;

/// Errors related to building a [`SymbolTable`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolTableError {
    /// A character was mapped to an empty pattern.
    #[error("Pattern for {:?} is empty", character)]
    EmptyPattern {
        /// The character whose pattern was empty.
        character: char,
    },

    /// A pattern contained something other than `.` or `-`.
    #[error("Pattern {:?} for {:?} contains invalid symbol {:?}", pattern, character, symbol)]
    InvalidSymbol {
        /// The character being mapped.
        character: char,

        /// The full pattern that was provided.
        pattern: String,

        /// The offending symbol.
        symbol: char,
    },

    /// The space character was mapped; it is reserved for word gaps.
    #[error("The space character is reserved for word gaps and cannot be mapped")]
    ReservedCharacter,
}

/// One of the two pulse kinds in the signaling alphabet.
///
/// # Examples
///
/// ```
/// use beacon_core::Symbol;
///
/// assert_eq!(Some(Symbol::Dash), Symbol::from_char('-'));
/// assert_eq!("-", Symbol::Dash.to_string());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A short pulse lasting one unit.
    Dot,
    /// A long pulse lasting three units.
    Dash,
}

impl Symbol {
    /// Parses a symbol from its conventional `.` or `-` representation.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }

    /// Returns the conventional character for this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// International Morse patterns for letters, digits and common punctuation.
const STANDARD_PATTERNS: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (',', "--..--"),
    ('.', ".-.-.-"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('-', "-....-"),
    ('(', "-.--."),
    (')', "-.--.-"),
];

lazy_static! {
    static ref STANDARD: SymbolTable = SymbolTable::from_patterns(STANDARD_PATTERNS.iter().copied())
        .unwrap(); // Patterns are constant and valid so safe to unwrap.
}

/// Immutable mapping from an uppercase character to its sequence of [`Symbol`]s.
///
/// Every mapped character has a non-empty sequence. Looking up a character that
/// isn't mapped yields an empty slice rather than an error, so callers can skip
/// it silently.
///
/// # Examples
///
/// ```
/// use beacon_core::{Symbol, SymbolTable};
///
/// let table = SymbolTable::standard();
/// assert_eq!(&[Symbol::Dot, Symbol::Dash], table.lookup('a'));
/// assert!(table.lookup('#').is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<char, Vec<Symbol>>,
}

impl SymbolTable {
    /// Returns the shared standard table, built once on first use.
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// Builds a custom table from `(character, pattern)` pairs, where each pattern
    /// is written with `.` and `-`.
    ///
    /// Characters are uppercased before insertion; a later pair for the same
    /// character replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is empty, contains anything other than `.` and `-`,
    /// or if the space character is mapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use beacon_core::{Symbol, SymbolTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// #
    /// let table = SymbolTable::from_patterns(vec![('e', "."), ('t', "-")])?;
    /// assert_eq!(&[Symbol::Dash], table.lookup('T'));
    /// assert_eq!(2, table.len());
    /// #
    /// # Ok(()) }
    /// ```
    pub fn from_patterns<'p, I>(patterns: I) -> Result<Self, SymbolTableError>
    where
        I: IntoIterator<Item = (char, &'p str)>,
    {
        let mut entries = HashMap::new();
        for (character, pattern) in patterns {
            if character == ' ' {
                return Err(SymbolTableError::ReservedCharacter);
            }
            let character = normalize(character);
            if pattern.is_empty() {
                return Err(SymbolTableError::EmptyPattern { character });
            }
            let symbols = pattern
                .chars()
                .map(|symbol| {
                    Symbol::from_char(symbol).ok_or_else(|| SymbolTableError::InvalidSymbol {
                        character,
                        pattern: pattern.to_owned(),
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let _ = entries.insert(character, symbols);
        }
        Ok(SymbolTable { entries })
    }

    /// Returns the symbols for a character (case-insensitive), or an empty slice if unmapped.
    pub fn lookup(&self, character: char) -> &[Symbol] {
        self.entries
            .get(&normalize(character))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the character (case-insensitive) has an entry.
    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&normalize(character))
    }

    /// Renders a character's entry as a dot/dash string.
    ///
    /// # Examples
    ///
    /// ```
    /// use beacon_core::SymbolTable;
    ///
    /// let table = SymbolTable::standard();
    /// assert_eq!(Some("-...".to_string()), table.pattern('b'));
    /// assert_eq!(None, table.pattern('~'));
    /// ```
    pub fn pattern(&self, character: char) -> Option<String> {
        self.entries
            .get(&normalize(character))
            .map(|symbols| symbols.iter().map(|s| s.as_char()).collect())
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uppercases a character, leaving it alone if the uppercase form isn't a single character.
fn normalize(character: char) -> char {
    let mut upper = character.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => character,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn standard_table_contents() {
        let table = SymbolTable::standard();
        assert_eq!(STANDARD_PATTERNS.len(), table.len());
        for &(character, pattern) in STANDARD_PATTERNS {
            assert!(!table.lookup(character).is_empty());
            assert_eq!(Some(pattern.to_string()), table.pattern(character));
        }
    }

    #[test]
    fn standard_table_is_shared() {
        assert!(std::ptr::eq(SymbolTable::standard(), SymbolTable::standard()));
    }

    #[test_case('s', "..." ; "lowercase letter")]
    #[test_case('S', "..." ; "uppercase letter")]
    #[test_case('0', "-----" ; "digit")]
    #[test_case(',', "--..--" ; "comma")]
    #[test_case(')', "-.--.-" ; "close paren")]
    fn lookup_known(character: char, expected: &str) {
        let symbols: String = SymbolTable::standard()
            .lookup(character)
            .iter()
            .map(|s| s.as_char())
            .collect();
        assert_eq!(expected, symbols);
    }

    #[test_case('#' ; "hash")]
    #[test_case(' ' ; "space")]
    #[test_case('é' ; "accented")]
    #[test_case('\n' ; "newline")]
    fn lookup_unmapped(character: char) {
        let table = SymbolTable::standard();
        assert!(table.lookup(character).is_empty());
        assert!(!table.contains(character));
        assert_eq!(None, table.pattern(character));
    }

    #[test]
    fn custom_table_errors() {
        assert_eq!(
            Err(SymbolTableError::EmptyPattern { character: 'X' }),
            SymbolTable::from_patterns(vec![('x', "")])
        );
        assert_eq!(
            Err(SymbolTableError::InvalidSymbol {
                character: 'Q',
                pattern: "-_".to_string(),
                symbol: '_',
            }),
            SymbolTable::from_patterns(vec![('q', "-_")])
        );
        assert_eq!(
            Err(SymbolTableError::ReservedCharacter),
            SymbolTable::from_patterns(vec![(' ', ".")])
        );
    }

    #[test]
    fn custom_table_later_entry_wins() {
        let table = SymbolTable::from_patterns(vec![('a', "."), ('A', "--")]).unwrap();
        assert_eq!(1, table.len());
        assert_eq!(&[Symbol::Dash, Symbol::Dash], table.lookup('a'));
    }

    #[test]
    fn empty_table() {
        let table = SymbolTable::from_patterns(vec![]).unwrap();
        assert!(table.is_empty());
        assert!(table.lookup('A').is_empty());
    }
}

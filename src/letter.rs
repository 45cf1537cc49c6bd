//! Letter: an alphabet index in the range [0, 26).
//!
//! All substitution arithmetic inside the machine happens on [`Letter`]
//! values modulo 26. Conversion to and from display characters only
//! happens at the edges (wiring strings, messages, configuration).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EnigmaError};

/// Number of letters in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A letter of the machine alphabet, stored as its index (A = 0, Z = 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Letter = Letter(0);

    /// Creates a letter from its alphabet index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::LetterOutOfRange`] if `index >= 26`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::Letter;
    ///
    /// assert_eq!(Letter::from_index(16).unwrap().to_char(), 'Q');
    /// assert!(Letter::from_index(26).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self, EnigmaError> {
        if (index as usize) < ALPHABET_LEN {
            Ok(Letter(index))
        } else {
            Err(EnigmaError::LetterOutOfRange(index))
        }
    }

    /// Creates a letter from an ASCII character of either case.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] for anything outside `A-Z`/`a-z`.
    pub fn from_char(c: char) -> Result<Self, EnigmaError> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidLetter(c))
        }
    }

    /// Const constructor for uppercase ASCII literals such as `b'Q'`.
    ///
    /// `c` must be in `b'A'..=b'Z'`; other bytes are a caller bug.
    pub(crate) const fn ascii(c: u8) -> Letter {
        debug_assert!(c.is_ascii_uppercase(), "Letter::ascii expects b'A'..=b'Z'");
        Letter((c - b'A') % ALPHABET_LEN as u8)
    }

    /// Returns the uppercase display character.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Returns the alphabet index in [0, 26).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns `(self + by) mod 26`.
    pub fn offset(self, by: Letter) -> Letter {
        Letter((self.0 + by.0) % ALPHABET_LEN as u8)
    }

    /// Returns `(self - by) mod 26`.
    pub fn unoffset(self, by: Letter) -> Letter {
        Letter((self.0 + ALPHABET_LEN as u8 - by.0) % ALPHABET_LEN as u8)
    }

    /// Returns the following letter, wrapping `Z` to `A`.
    pub fn successor(self) -> Letter {
        Letter((self.0 + 1) % ALPHABET_LEN as u8)
    }

    /// Iterates over `A..=Z` in index order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parses a 26-letter wiring string into a substitution table.
///
/// Entry `i` of the table is the letter that input letter `i` is wired to.
/// Lowercase letters are accepted and normalized.
///
/// # Errors
/// - [`ConfigError::WiringLength`] if the string does not hold 26 characters.
/// - [`ConfigError::InvalidWiringCharacter`] for a non-letter character.
/// - [`ConfigError::DuplicateWiring`] if a letter occurs twice.
pub fn parse_wiring(wiring: &str) -> Result<[Letter; ALPHABET_LEN], ConfigError> {
    let count = wiring.chars().count();
    if count != ALPHABET_LEN {
        return Err(ConfigError::WiringLength(count));
    }

    let mut table = [Letter::A; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, c) in table.iter_mut().zip(wiring.chars()) {
        let letter = Letter::from_char(c).map_err(|_| ConfigError::InvalidWiringCharacter(c))?;
        if seen[letter.0 as usize] {
            return Err(ConfigError::DuplicateWiring(letter.to_char()));
        }
        seen[letter.0 as usize] = true;
        *slot = letter;
    }
    Ok(table)
}

/// Formats a substitution table back into its 26-letter wiring string.
pub(crate) fn wiring_to_string(table: &[Letter; ALPHABET_LEN]) -> String {
    table.iter().map(|l| l.to_char()).collect()
}

//! Reflector: fixed involutive wiring that turns the signal around.

use crate::error::{ConfigError, EnigmaError};
use crate::letter::{parse_wiring, wiring_to_string, Letter, ALPHABET_LEN};

/// Fixed wiring that sends the signal back through the rotors.
///
/// The wiring pairs letters: `reflect(reflect(c)) == c` and
/// `reflect(c) != c` for every letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: [Letter; ALPHABET_LEN],
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if the wiring is not a
    /// permutation, is not an involution or maps a letter to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::Reflector;
    ///
    /// assert!(Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").is_ok());
    /// assert!(Reflector::new("BCDEFGHIJKLMNOPQRSTUVWXYZA").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let wiring = parse_wiring(wiring)?;
        for (input, &output) in Letter::all().zip(wiring.iter()) {
            if output == input {
                return Err(ConfigError::ReflectorFixedPoint(input.to_char()).into());
            }
            if wiring[output.index() as usize] != input {
                return Err(ConfigError::ReflectorNotInvolutive {
                    from: input.to_char(),
                    to: output.to_char(),
                }
                .into());
            }
        }
        Ok(Reflector { wiring })
    }

    /// Returns the letter `c` is wired to.
    pub fn reflect(&self, c: Letter) -> Letter {
        self.wiring[c.index() as usize]
    }

    /// Wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        wiring_to_string(&self.wiring)
    }
}

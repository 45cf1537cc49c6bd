//! Rotor: a rotating substitution wheel.
//!
//! A rotor carries a fixed wiring permutation, a turnover notch and a
//! mutable rotational position. The position offsets the signal on entry
//! and is removed again on exit, modelling a wheel turned `position`
//! steps relative to its printed wiring.

use crate::error::EnigmaError;
use crate::letter::{parse_wiring, wiring_to_string, Letter, ALPHABET_LEN};

/// A rotating substitution wheel with a turnover notch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
    notch: Letter,
    position: Letter,
}

impl Rotor {
    /// Creates a rotor from a 26-letter wiring string.
    ///
    /// # Parameters
    /// - `wiring`: Letter `i` of the string is where input `i` is wired to.
    /// - `notch`: Position at which [`rotate`](Self::rotate) reports a carry.
    /// - `position`: Initial rotational position.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if `wiring` is not a
    /// permutation of the 26 letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Letter, Rotor};
    ///
    /// let q = Letter::from_char('Q').unwrap();
    /// let rotor = Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", q, Letter::A).unwrap();
    /// assert_eq!(rotor.encode_forward(Letter::A).to_char(), 'E');
    /// ```
    pub fn new(wiring: &str, notch: Letter, position: Letter) -> Result<Self, EnigmaError> {
        let wiring = parse_wiring(wiring)?;
        let mut inverse = [Letter::A; ALPHABET_LEN];
        for (input, output) in Letter::all().zip(wiring.iter()) {
            inverse[output.index() as usize] = input;
        }
        Ok(Rotor {
            wiring,
            inverse,
            notch,
            position,
        })
    }

    /// Passes a letter through the rotor on the way towards the reflector.
    ///
    /// Computes `wiring[(c + position) mod 26] - position (mod 26)`.
    pub fn encode_forward(&self, c: Letter) -> Letter {
        let contact = c.offset(self.position);
        self.wiring[contact.index() as usize].unoffset(self.position)
    }

    /// Passes a letter through the rotor on the way back from the reflector.
    ///
    /// Finds the wiring index whose output is `(c + position) mod 26` and
    /// returns that index minus `position`. Exact inverse of
    /// [`encode_forward`](Self::encode_forward) at the same position.
    pub fn encode_backward(&self, c: Letter) -> Letter {
        let contact = c.offset(self.position);
        self.inverse[contact.index() as usize].unoffset(self.position)
    }

    /// Advances the rotor one step.
    ///
    /// # Returns
    /// `true` if the new position equals the notch, meaning the next rotor
    /// in the chain should step as well.
    pub fn rotate(&mut self) -> bool {
        self.position = self.position.successor();
        self.position == self.notch
    }

    /// Current rotational position.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Moves the rotor to `position` without signalling a carry.
    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Turnover notch.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        wiring_to_string(&self.wiring)
    }
}

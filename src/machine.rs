//! CipherMachine: plugboard, rotor stack and reflector wired together.
//!
//! Drives the per-letter signal path and the stepping policy. Rotor
//! positions are the only state that changes after construction.

use tracing::{debug, trace};

use crate::config::MachineConfig;
use crate::error::{ConfigError, EnigmaError};
use crate::letter::Letter;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Rotor cipher machine.
///
/// # Signal path
///
/// ```text
/// plugboard -> rotors[0..n] forward -> reflector -> rotors[n..0] backward -> plugboard
/// ```
///
/// After each letter the first rotor steps. A rotor whose step lands on
/// its notch carries into the next rotor; the chain stops at the first
/// rotor that does not. There is no double-step of the middle rotor.
///
/// Encoding and decoding are the same operation: a machine reset to the
/// same positions turns ciphertext back into plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherMachine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl CipherMachine {
    /// Assembles a machine from its parts.
    ///
    /// # Parameters
    /// - `rotors`: Rotors in signal-entry order (rightmost wheel first).
    /// - `reflector`: The reflector.
    /// - `plugboard`: The plugboard.
    ///
    /// # Errors
    /// Returns [`ConfigError::NoRotors`] (wrapped) if `rotors` is empty.
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(ConfigError::NoRotors.into());
        }
        debug!(
            rotors = rotors.len(),
            plugboard_pairs = plugboard.pairs().len(),
            "cipher machine assembled"
        );
        Ok(CipherMachine {
            rotors,
            reflector,
            plugboard,
        })
    }

    /// Builds a machine from a caller-owned configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{CipherMachine, MachineConfig};
    ///
    /// let config = MachineConfig::historical_default();
    /// let mut machine = CipherMachine::from_config(&config).unwrap();
    /// assert_eq!(machine.encode_message("AAAAA"), "FWUPG");
    /// ```
    pub fn from_config(config: &MachineConfig) -> Result<Self, EnigmaError> {
        config.build()
    }

    /// Encodes one letter and steps the rotors.
    pub fn encode_letter(&mut self, c: Letter) -> Letter {
        let mut signal = self.plugboard.swap(c);
        for rotor in &self.rotors {
            signal = rotor.encode_forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.encode_backward(signal);
        }
        signal = self.plugboard.swap(signal);

        trace!(input = %c, output = %signal, "letter encoded");
        self.step();
        signal
    }

    /// Advances the first rotor and carries through every rotor that lands
    /// on its notch.
    fn step(&mut self) {
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            if !rotor.rotate() {
                break;
            }
            trace!(rotor = i, position = %rotor.position(), "notch reached, carrying");
        }
    }

    /// Encodes an ASCII letter of either case.
    ///
    /// # Returns
    /// The uppercase result, or `None` for a non-letter, in which case the
    /// rotors do not move.
    pub fn encode_char(&mut self, c: char) -> Option<char> {
        let letter = Letter::from_char(c).ok()?;
        Some(self.encode_letter(letter).to_char())
    }

    /// Encodes a whole message.
    ///
    /// Letters are upper-cased and encoded in order; every other character
    /// (digits, punctuation, whitespace, non-ASCII) is dropped.
    pub fn encode_message(&mut self, message: &str) -> String {
        message.chars().filter_map(|c| self.encode_char(c)).collect()
    }

    /// Current rotor positions in signal order.
    pub fn positions(&self) -> Vec<Letter> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Restores rotor positions, e.g. to decode from a checkpoint.
    ///
    /// # Errors
    /// Returns [`ConfigError::PositionCount`] (wrapped) if `positions` does
    /// not hold exactly one letter per rotor.
    pub fn set_positions(&mut self, positions: &[Letter]) -> Result<(), EnigmaError> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigError::PositionCount {
                expected: self.rotors.len(),
                actual: positions.len(),
            }
            .into());
        }
        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
        let restored: String = positions.iter().map(|l| l.to_char()).collect();
        debug!(positions = %restored, "rotor positions restored");
        Ok(())
    }

    /// Number of rotors.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Rotors in signal order.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

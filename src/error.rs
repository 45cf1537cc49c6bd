//! Error types for the Enigma machine library.

use thiserror::Error;

/// Errors produced by the Enigma machine library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Character is not an ASCII letter.
    #[error("Character {0:?} is not a letter A-Z")]
    InvalidLetter(char),
    /// Letter index is outside the range [0, 26).
    #[error("Letter index {0} is outside the range 0..26")]
    LetterOutOfRange(u8),
    /// Machine configuration was rejected at construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Reasons a rotor, reflector, plugboard or machine configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Wiring string does not hold exactly 26 letters.
    #[error("Wiring must have 26 letters, got {0}")]
    WiringLength(usize),
    /// Wiring string contains a character that is not a letter.
    #[error("Wiring contains non-letter character {0:?}")]
    InvalidWiringCharacter(char),
    /// Wiring maps two inputs to the same letter.
    #[error("Wiring is not a permutation: {0} appears more than once")]
    DuplicateWiring(char),
    /// Reflector maps `from` to `to` but `to` does not map back to `from`.
    #[error("Reflector is not an involution: {from} maps to {to} but not back")]
    ReflectorNotInvolutive { from: char, to: char },
    /// Reflector maps a letter to itself.
    #[error("Reflector maps {0} to itself")]
    ReflectorFixedPoint(char),
    /// Plugboard letter is used by more than one pair.
    #[error("Plugboard letter {0} is used by more than one pair")]
    PlugboardConflict(char),
    /// Plugboard pair connects a letter to itself.
    #[error("Plugboard cannot pair {0} with itself")]
    PlugboardSelfPair(char),
    /// Plugboard mapping is not symmetric.
    #[error("Plugboard maps {from} to {to} but not {to} to {from}")]
    PlugboardAsymmetric { from: char, to: char },
    /// Plugboard setting contains a character that is not a letter.
    #[error("Plugboard contains non-letter character {0:?}")]
    InvalidPlugboardCharacter(char),
    /// Plugboard notation could not be parsed.
    #[error("Plugboard pair {0:?} is not two letters")]
    PlugboardNotation(String),
    /// Machine was configured without rotors.
    #[error("Machine needs at least one rotor")]
    NoRotors,
    /// Number of positions does not match the number of rotors.
    #[error("Expected {expected} rotor positions, got {actual}")]
    PositionCount { expected: usize, actual: usize },
    /// Rotor model name is not one of I, II, III, IV, V.
    #[error("Unknown rotor model {0:?}")]
    UnknownRotor(String),
    /// Reflector model name is not one of A, B, C.
    #[error("Unknown reflector model {0:?}")]
    UnknownReflector(String),
}

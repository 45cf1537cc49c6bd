//! Wirings and notches of the standard service rotors and reflectors.

use std::fmt;
use std::str::FromStr;

use crate::config::RotorConfig;
use crate::error::{ConfigError, EnigmaError};
use crate::letter::Letter;

/// Wiring of rotor I.
pub const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
/// Wiring of rotor II.
pub const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
/// Wiring of rotor III.
pub const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";
/// Wiring of rotor IV.
pub const ROTOR_IV: &str = "ESOVPZJAYQUIRHXLNFTGKDCMWB";
/// Wiring of rotor V.
pub const ROTOR_V: &str = "VZBRGITYUPSDNHLXAWMJQOFECK";

/// Wiring of reflector A.
pub const REFLECTOR_A: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";
/// Wiring of reflector B.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";
/// Wiring of reflector C.
pub const REFLECTOR_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// Standard rotor models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorModel {
    /// Every model, I to V.
    pub const ALL: [RotorModel; 5] = [
        RotorModel::I,
        RotorModel::II,
        RotorModel::III,
        RotorModel::IV,
        RotorModel::V,
    ];

    /// Wiring as a 26-letter string.
    pub fn wiring(self) -> &'static str {
        match self {
            RotorModel::I => ROTOR_I,
            RotorModel::II => ROTOR_II,
            RotorModel::III => ROTOR_III,
            RotorModel::IV => ROTOR_IV,
            RotorModel::V => ROTOR_V,
        }
    }

    /// Turnover notch: Q, E, V, J, Z for I to V.
    pub fn notch(self) -> Letter {
        match self {
            RotorModel::I => Letter::ascii(b'Q'),
            RotorModel::II => Letter::ascii(b'E'),
            RotorModel::III => Letter::ascii(b'V'),
            RotorModel::IV => Letter::ascii(b'J'),
            RotorModel::V => Letter::ascii(b'Z'),
        }
    }

    /// Rotor settings for this model at the given starting position.
    pub fn config(self, position: Letter) -> RotorConfig {
        RotorConfig {
            wiring: self.wiring().to_string(),
            notch: self.notch(),
            position,
        }
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorModel {
    type Err = EnigmaError;

    /// Parses a roman numeral `I` to `V`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorModel::ALL
            .into_iter()
            .find(|model| model.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownRotor(s.to_string()).into())
    }
}

/// Standard reflector models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorModel {
    A,
    B,
    C,
}

impl ReflectorModel {
    /// Wiring as a 26-letter string.
    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorModel::A => REFLECTOR_A,
            ReflectorModel::B => REFLECTOR_B,
            ReflectorModel::C => REFLECTOR_C,
        }
    }
}

impl FromStr for ReflectorModel {
    type Err = EnigmaError;

    /// Parses `A`, `B` or `C`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(ReflectorModel::A),
            "B" => Ok(ReflectorModel::B),
            "C" => Ok(ReflectorModel::C),
            _ => Err(ConfigError::UnknownReflector(s.to_string()).into()),
        }
    }
}

//! Caller-owned machine configuration.
//!
//! A [`MachineConfig`] describes wiring, notches, starting positions and
//! plugboard cabling. It is plain data: build as many independent
//! [`CipherMachine`]s from it as needed. Letters serialize as characters,
//! so a configuration reads naturally in any serde format:
//!
//! ```text
//! { "rotors": [ { "wiring": "EKMF...", "notch": "Q", "position": "A" }, ... ],
//!   "reflector": "YRUH...",
//!   "plugboard": [ ["A", "B"], ["C", "D"] ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EnigmaError};
use crate::historical::{ReflectorModel, RotorModel};
use crate::letter::Letter;
use crate::machine::CipherMachine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Settings for one rotor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// 26-letter wiring string.
    pub wiring: String,
    /// Turnover notch.
    pub notch: Letter,
    /// Starting position. Defaults to `A`.
    #[serde(default)]
    pub position: Letter,
}

impl RotorConfig {
    /// Builds the rotor.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] if the wiring is invalid.
    pub fn build(&self) -> Result<Rotor, EnigmaError> {
        Rotor::new(&self.wiring, self.notch, self.position)
    }
}

/// Complete machine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotors in signal-entry order.
    pub rotors: Vec<RotorConfig>,
    /// 26-letter reflector wiring.
    pub reflector: String,
    /// Plugboard cables. Defaults to none.
    #[serde(default)]
    pub plugboard: Vec<(Letter, Letter)>,
}

impl MachineConfig {
    /// The settings of the classic console program: rotors I, II, III at
    /// `A`, reflector B, plugboard A-B and C-D.
    pub fn historical_default() -> Self {
        MachineConfig {
            rotors: vec![
                RotorModel::I.config(Letter::A),
                RotorModel::II.config(Letter::A),
                RotorModel::III.config(Letter::A),
            ],
            reflector: ReflectorModel::B.wiring().to_string(),
            plugboard: vec![
                (Letter::ascii(b'A'), Letter::ascii(b'B')),
                (Letter::ascii(b'C'), Letter::ascii(b'D')),
            ],
        }
    }

    /// Returns a copy with the rotor starting positions replaced.
    ///
    /// # Errors
    /// Returns [`ConfigError::PositionCount`] (wrapped) on a length mismatch.
    pub fn with_positions(&self, positions: &[Letter]) -> Result<Self, EnigmaError> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigError::PositionCount {
                expected: self.rotors.len(),
                actual: positions.len(),
            }
            .into());
        }
        let mut config = self.clone();
        for (rotor, &position) in config.rotors.iter_mut().zip(positions) {
            rotor.position = position;
        }
        Ok(config)
    }

    /// Validates every component and assembles the machine.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfiguration`] for the first invalid
    /// rotor, reflector or plugboard setting, or if there are no rotors.
    pub fn build(&self) -> Result<CipherMachine, EnigmaError> {
        let rotors = self
            .rotors
            .iter()
            .map(RotorConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = Reflector::new(&self.reflector)?;
        let plugboard = Plugboard::from_letter_pairs(&self.plugboard)?;
        CipherMachine::new(rotors, reflector, plugboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_default_builds() {
        let config = MachineConfig::historical_default();
        assert_eq!(config.rotors.len(), 3);
        assert_eq!(config.rotors[0].notch.to_char(), 'Q');
        assert_eq!(config.rotors[1].notch.to_char(), 'E');
        assert_eq!(config.rotors[2].notch.to_char(), 'V');

        let mut machine = config.build().unwrap();
        assert_eq!(machine.encode_message("ARYANALKANE"), "FJDPPNJWJWU");
    }

    #[test]
    fn test_each_build_is_independent() {
        let config = MachineConfig::historical_default();
        let mut first = config.build().unwrap();
        let mut second = config.build().unwrap();
        first.encode_message("ADVANCE");
        assert_eq!(second.encode_message("AAAAA"), "FWUPG");
    }

    #[test]
    fn test_with_positions() {
        let start = [10u8, 3, 7].map(|i| Letter::from_index(i).unwrap());
        let config = MachineConfig::historical_default()
            .with_positions(&start)
            .unwrap();
        let mut machine = config.build().unwrap();
        assert_eq!(machine.encode_message("HELLOWORLD"), "LRDQBYZZQS");
    }

    #[test]
    fn test_with_positions_length_mismatch() {
        let result = MachineConfig::historical_default().with_positions(&[]);
        assert_eq!(
            result,
            Err(EnigmaError::InvalidConfiguration(ConfigError::PositionCount {
                expected: 3,
                actual: 0
            }))
        );
    }

    #[test]
    fn test_build_rejects_bad_reflector() {
        let mut config = MachineConfig::historical_default();
        config.reflector = RotorModel::I.wiring().to_string();
        assert!(matches!(
            config.build(),
            Err(EnigmaError::InvalidConfiguration(
                ConfigError::ReflectorNotInvolutive { .. }
            ))
        ));
    }

    #[test]
    fn test_build_rejects_conflicting_plugboard() {
        let mut config = MachineConfig::historical_default();
        let a = Letter::A;
        let z = Letter::from_char('Z').unwrap();
        config.plugboard.push((a, z));
        assert_eq!(
            config.build(),
            Err(EnigmaError::InvalidConfiguration(ConfigError::PlugboardConflict('A')))
        );
    }

    #[test]
    fn test_build_rejects_no_rotors() {
        let mut config = MachineConfig::historical_default();
        config.rotors.clear();
        assert_eq!(
            config.build(),
            Err(EnigmaError::InvalidConfiguration(ConfigError::NoRotors))
        );
    }
}

//! Rotor cipher machine simulator.
//!
//! Models the electromechanical polyalphabetic substitution machine known
//! as Enigma: a stack of stepping rotors, a reflector and a plugboard,
//! composed into a per-letter signal path whose substitution changes after
//! every letter.
//!
//! # Architecture
//!
//! ```text
//! Letter      (index in [0, 26), all arithmetic mod 26)
//!     ↓
//! Plugboard   (symmetric pair swap, identity for unplugged letters)
//!     ↓
//! Rotor × N   (forward: wiring offset by position, in signal order)
//!     ↓
//! Reflector   (fixed involution, no fixed points)
//!     ↓
//! Rotor × N   (backward: inverse wiring, reverse order)
//!     ↓
//! Plugboard
//!     ↓
//! CipherMachine steps rotor 0, carrying into rotor i+1 when rotor i lands on its notch
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the same starting positions:
//!
//! ```
//! use enigma_machine::MachineConfig;
//!
//! let config = MachineConfig::historical_default();
//!
//! let mut encoder = config.build().unwrap();
//! let ciphertext = encoder.encode_message("Attack at dawn!");
//! assert_eq!(ciphertext.len(), 12);
//!
//! let mut decoder = config.build().unwrap();
//! assert_eq!(decoder.encode_message(&ciphertext), "ATTACKATDAWN");
//! ```
//!
//! Assemble a machine from explicit parts:
//!
//! ```
//! use enigma_machine::historical::{RotorModel, REFLECTOR_B};
//! use enigma_machine::{CipherMachine, Letter, Plugboard, Reflector};
//!
//! let rotors = [RotorModel::III, RotorModel::II, RotorModel::I]
//!     .into_iter()
//!     .map(|model| model.config(Letter::A).build())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let plugboard: Plugboard = "AZ BY".parse().unwrap();
//! let mut machine =
//!     CipherMachine::new(rotors, Reflector::new(REFLECTOR_B).unwrap(), plugboard).unwrap();
//!
//! let out = machine.encode_char('q').unwrap();
//! assert!(out.is_ascii_uppercase());
//! assert_ne!(out, 'Q');
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod historical;
pub mod letter;

mod machine;
mod plugboard;
mod reflector;
mod rotor;

pub use config::{MachineConfig, RotorConfig};
pub use error::{ConfigError, EnigmaError};
pub use letter::Letter;
pub use machine::CipherMachine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;

//! Plugboard: symmetric letter-pair swaps on the way in and out.
//!
//! Stored as a total 26-entry table that starts as the identity; every
//! installed pair is written in both directions, so an unplugged letter
//! maps to itself and the board is its own inverse.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{ConfigError, EnigmaError};
use crate::letter::{Letter, ALPHABET_LEN};

/// Symmetric letter-pair swap table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [Letter; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables: every letter maps to itself.
    pub fn identity() -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for (slot, letter) in table.iter_mut().zip(Letter::all()) {
            *slot = letter;
        }
        Plugboard { table }
    }

    /// Creates a plugboard from a list of letter pairs.
    ///
    /// Each pair is installed in both directions.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidPlugboardCharacter`] if a character is not a letter.
    /// - [`ConfigError::PlugboardSelfPair`] if a pair joins a letter to itself.
    /// - [`ConfigError::PlugboardConflict`] if a letter is used twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Letter, Plugboard};
    ///
    /// let board = Plugboard::from_pairs(&[('A', 'B'), ('C', 'D')]).unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(board.swap(a).to_char(), 'B');
    /// ```
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut letters = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            letters.push((plug_letter(a)?, plug_letter(b)?));
        }
        Self::from_letter_pairs(&letters)
    }

    /// Creates a plugboard from pairs of [`Letter`]s.
    ///
    /// # Errors
    /// Same configuration errors as [`from_pairs`](Self::from_pairs).
    pub fn from_letter_pairs(pairs: &[(Letter, Letter)]) -> Result<Self, EnigmaError> {
        let mut board = Self::identity();
        for &(a, b) in pairs {
            if a == b {
                return Err(ConfigError::PlugboardSelfPair(a.to_char()).into());
            }
            for letter in [a, b] {
                if board.table[letter.index() as usize] != letter {
                    return Err(ConfigError::PlugboardConflict(letter.to_char()).into());
                }
            }
            board.table[a.index() as usize] = b;
            board.table[b.index() as usize] = a;
        }
        Ok(board)
    }

    /// Creates a plugboard from an explicit mapping listing both directions
    /// of every pair, e.g. `{A: B, B: A}`.
    ///
    /// Entries mapping a letter to itself are ignored.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidPlugboardCharacter`] if a key or value is not a letter.
    /// - [`ConfigError::PlugboardAsymmetric`] if `a -> b` is present without
    ///   `b -> a`.
    pub fn from_map(map: &HashMap<char, char>) -> Result<Self, EnigmaError> {
        let mut board = Self::identity();
        for (&from, &to) in map {
            let a = plug_letter(from)?;
            let b = plug_letter(to)?;
            let back = map
                .get(&b.to_char())
                .or_else(|| map.get(&b.to_char().to_ascii_lowercase()))
                .map(|&c| plug_letter(c))
                .transpose()?;
            if a != b && back != Some(a) {
                return Err(ConfigError::PlugboardAsymmetric {
                    from: a.to_char(),
                    to: b.to_char(),
                }
                .into());
            }
            board.table[a.index() as usize] = b;
        }
        Ok(board)
    }

    /// Returns the letter `c` is cabled to, or `c` itself if unplugged.
    pub fn swap(&self, c: Letter) -> Letter {
        self.table[c.index() as usize]
    }

    /// Installed pairs, each listed once with the lower letter first.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .filter_map(|a| {
                let b = self.swap(a);
                (a < b).then_some((a, b))
            })
            .collect()
    }

    /// Returns `true` if no cables are installed.
    pub fn is_identity(&self) -> bool {
        Letter::all().all(|c| self.swap(c) == c)
    }
}

/// Converts a plugboard character, reporting non-letters as a configuration error.
fn plug_letter(c: char) -> Result<Letter, ConfigError> {
    Letter::from_char(c).map_err(|_| ConfigError::InvalidPlugboardCharacter(c))
}

impl FromStr for Plugboard {
    type Err = EnigmaError;

    /// Parses the whitespace-separated pair notation, e.g. `"AB CD EF"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => pairs.push((a, b)),
                _ => return Err(ConfigError::PlugboardNotation(token.to_string()).into()),
            }
        }
        Self::from_pairs(&pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_identity_maps_every_letter_to_itself() {
        let board = Plugboard::identity();
        for c in Letter::all() {
            assert_eq!(board.swap(c), c);
        }
        assert!(board.is_identity());
        assert_eq!(board, Plugboard::default());
    }

    #[test]
    fn test_pairs_are_symmetric() {
        let board = Plugboard::from_pairs(&[('A', 'B'), ('C', 'D')]).unwrap();
        assert_eq!(board.swap(letter('A')), letter('B'));
        assert_eq!(board.swap(letter('B')), letter('A'));
        assert_eq!(board.swap(letter('C')), letter('D'));
        assert_eq!(board.swap(letter('D')), letter('C'));
        assert_eq!(board.swap(letter('E')), letter('E'));
        assert!(!board.is_identity());
    }

    #[test]
    fn test_pairs_listing() {
        let board = Plugboard::from_pairs(&[('Z', 'A'), ('c', 'd')]).unwrap();
        assert_eq!(
            board.pairs(),
            vec![(letter('A'), letter('Z')), (letter('C'), letter('D'))]
        );
    }

    #[test]
    fn test_rejects_self_pair() {
        assert_eq!(
            Plugboard::from_pairs(&[('A', 'A')]),
            Err(EnigmaError::InvalidConfiguration(ConfigError::PlugboardSelfPair('A')))
        );
    }

    #[test]
    fn test_rejects_reused_letter() {
        assert_eq!(
            Plugboard::from_pairs(&[('A', 'B'), ('B', 'C')]),
            Err(EnigmaError::InvalidConfiguration(ConfigError::PlugboardConflict('B')))
        );
    }

    #[test]
    fn test_rejects_non_letter() {
        assert_eq!(
            Plugboard::from_pairs(&[('A', '?')]),
            Err(EnigmaError::InvalidConfiguration(
                ConfigError::InvalidPlugboardCharacter('?')
            ))
        );
    }

    #[test]
    fn test_parse_notation_rejects_non_letter() {
        assert_eq!(
            "AB A1".parse::<Plugboard>(),
            Err(EnigmaError::InvalidConfiguration(
                ConfigError::InvalidPlugboardCharacter('1')
            ))
        );
    }

    #[test]
    fn test_from_map_rejects_non_letter() {
        let map: HashMap<char, char> = [('A', '#'), ('#', 'A')].into_iter().collect();
        assert!(matches!(
            Plugboard::from_map(&map),
            Err(EnigmaError::InvalidConfiguration(
                ConfigError::InvalidPlugboardCharacter('#')
            ))
        ));
    }

    #[test]
    fn test_from_map_symmetric() {
        let map: HashMap<char, char> = [('A', 'B'), ('B', 'A'), ('C', 'D'), ('D', 'C')]
            .into_iter()
            .collect();
        let board = Plugboard::from_map(&map).unwrap();
        assert_eq!(board, Plugboard::from_pairs(&[('A', 'B'), ('C', 'D')]).unwrap());
    }

    #[test]
    fn test_from_map_lowercase_keys() {
        let map: HashMap<char, char> = [('a', 'B'), ('b', 'A')].into_iter().collect();
        let board = Plugboard::from_map(&map).unwrap();
        assert_eq!(board, Plugboard::from_pairs(&[('A', 'B')]).unwrap());
    }

    #[test]
    fn test_from_map_rejects_one_way_entry() {
        let map: HashMap<char, char> = [('A', 'B')].into_iter().collect();
        assert_eq!(
            Plugboard::from_map(&map),
            Err(EnigmaError::InvalidConfiguration(
                ConfigError::PlugboardAsymmetric { from: 'A', to: 'B' }
            ))
        );
    }

    #[test]
    fn test_from_map_rejects_mismatched_return() {
        let map: HashMap<char, char> = [('A', 'B'), ('B', 'C'), ('C', 'B')].into_iter().collect();
        assert!(matches!(
            Plugboard::from_map(&map),
            Err(EnigmaError::InvalidConfiguration(
                ConfigError::PlugboardAsymmetric { .. }
            ))
        ));
    }

    #[test]
    fn test_parse_notation() {
        let board: Plugboard = "AB cd  EF".parse().unwrap();
        assert_eq!(board.pairs().len(), 3);
        assert_eq!(board.swap(letter('F')), letter('E'));
        assert!("".parse::<Plugboard>().unwrap().is_identity());
    }

    #[test]
    fn test_parse_notation_rejects_bad_token() {
        assert_eq!(
            "AB CDE".parse::<Plugboard>(),
            Err(EnigmaError::InvalidConfiguration(ConfigError::PlugboardNotation(
                "CDE".to_string()
            )))
        );
    }
}

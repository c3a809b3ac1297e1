//! Symbol definitions
//!
//! The symbol set is closed: six animals plus two wilds. `Wild` and
//! `QuantumWild` substitute for any animal on a payline but are never a
//! line's target symbol themselves; three quantum wilds form the exclusive
//! jackpot line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reel symbol.
///
/// Serialized with the snake_case identifiers the hosting frame expects
/// (`cat` … `quantum_wild`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Cat,
    Dog,
    Bird,
    Alligator,
    Whale,
    Elephant,
    Wild,
    QuantumWild,
}

impl Symbol {
    /// All symbols in canonical (weight-table) order.
    pub const ALL: [Symbol; 8] = [
        Symbol::Cat,
        Symbol::Dog,
        Symbol::Bird,
        Symbol::Alligator,
        Symbol::Whale,
        Symbol::Elephant,
        Symbol::Wild,
        Symbol::QuantumWild,
    ];

    /// True for both wild variants.
    pub const fn is_wild(self) -> bool {
        matches!(self, Symbol::Wild | Symbol::QuantumWild)
    }

    /// Wire identifier, matching the serde representation.
    pub const fn id(self) -> &'static str {
        match self {
            Symbol::Cat => "cat",
            Symbol::Dog => "dog",
            Symbol::Bird => "bird",
            Symbol::Alligator => "alligator",
            Symbol::Whale => "whale",
            Symbol::Elephant => "elephant",
            Symbol::Wild => "wild",
            Symbol::QuantumWild => "quantum_wild",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wild_classification() {
        assert!(Symbol::Wild.is_wild());
        assert!(Symbol::QuantumWild.is_wild());
        assert!(!Symbol::Cat.is_wild());
        assert!(!Symbol::Elephant.is_wild());
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&Symbol::QuantumWild).unwrap();
        assert_eq!(json, "\"quantum_wild\"");

        let back: Symbol = serde_json::from_str("\"alligator\"").unwrap();
        assert_eq!(back, Symbol::Alligator);
    }

    #[test]
    fn test_id_matches_serde() {
        for symbol in Symbol::ALL {
            let json = serde_json::to_string(&symbol).unwrap();
            assert_eq!(json, format!("\"{}\"", symbol.id()));
        }
    }
}

//! Table positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position at a 6-max table relative to the button.
///
/// This is the union of the labels the two trainer components use: the
/// equity estimator weights {UTG, MP, CO, BTN, SB, BB}, while the preflop
/// range charts are authored for {LJ, HJ, CO, BTN, SB, BB}. Each component
/// falls back to a neutral default for positions it has no data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    UTG,
    MP,
    LJ,
    HJ,
    CO,
    BTN,
    SB,
    BB,
}

impl Position {
    /// Short seat label.
    pub fn name(&self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::MP => "MP",
            Position::LJ => "LJ",
            Position::HJ => "HJ",
            Position::CO => "CO",
            Position::BTN => "BTN",
            Position::SB => "SB",
            Position::BB => "BB",
        }
    }

    /// All positions in action order.
    pub fn all() -> &'static [Position] {
        &[
            Position::UTG,
            Position::MP,
            Position::LJ,
            Position::HJ,
            Position::CO,
            Position::BTN,
            Position::SB,
            Position::BB,
        ]
    }

    /// Index in action order (0-7).
    pub fn index(&self) -> usize {
        match self {
            Position::UTG => 0,
            Position::MP => 1,
            Position::LJ => 2,
            Position::HJ => 3,
            Position::CO => 4,
            Position::BTN => 5,
            Position::SB => 6,
            Position::BB => 7,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_order() {
        assert_eq!(Position::BTN.name(), "BTN");
        assert_eq!(Position::BTN.to_string(), "BTN");
        assert_eq!(Position::all().len(), 8);

        for (i, pos) in Position::all().iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }
}

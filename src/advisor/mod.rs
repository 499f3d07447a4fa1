//! Preflop range advice.
//!
//! This module canonicalizes a two-card starting hand into standard poker
//! notation ("AA", "AKs", "AKo") and answers whether that hand is inside a
//! position's authored opening range. Membership is strict set lookup
//! against a constant table; there is no hand-strength fallback and no
//! partial matching.

mod chart;
mod ranges;

pub use chart::{ChartOutput, PositionChart};
pub use ranges::{
    BB_RANGE, BTN_RANGE, CO_RANGE, HJ_RANGE, LJ_RANGE, SB_RANGE, STANDARD_RANGES,
};

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::OnceLock;

use crate::cards::{Card, Hand, RANK_CHARS};
use crate::position::Position;

/// Canonicalize two hole cards into standard hand notation.
///
/// Ranks are sorted higher-first before building the notation, so the
/// result is independent of selection order: `[Ks, As]` and `[As, Ks]`
/// both canonicalize to "AKs". Pairs carry no suffix; non-pairs get `s`
/// when suited and `o` otherwise. Returns `None` unless exactly two cards
/// are supplied.
///
/// # Example
/// ```
/// use holdem_trainer::advisor::canonicalize;
/// use holdem_trainer::cards::Card;
///
/// let hole = [Card::from_str("Ks").unwrap(), Card::from_str("As").unwrap()];
/// assert_eq!(canonicalize(&hole).as_deref(), Some("AKs"));
/// ```
pub fn canonicalize(hole: &[Card]) -> Option<String> {
    let hand = Hand::from_cards(hole)?;
    let (high, low) = hand.high_first();

    if hand.is_pair() {
        Some(format!("{}{}", high.rank_char(), low.rank_char()))
    } else {
        let suffix = if hand.is_suited() { 's' } else { 'o' };
        Some(format!("{}{}{}", high.rank_char(), low.rank_char(), suffix))
    }
}

/// Binary advice for a preflop spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeAction {
    /// The hand is inside the position's opening range.
    Raise,
    /// The hand is outside the range (or the position has none).
    Fold,
}

impl RangeAction {
    /// Display label as shown by the advisor.
    pub fn label(&self) -> &'static str {
        match self {
            RangeAction::Raise => "RAISE",
            RangeAction::Fold => "FOLD",
        }
    }

    /// Map a membership result to an action.
    pub fn from_membership(in_range: bool) -> Self {
        if in_range {
            RangeAction::Raise
        } else {
            RangeAction::Fold
        }
    }
}

impl fmt::Display for RangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable mapping from position to its set of in-range hands.
///
/// The table is constructed once and never mutated; lookups are pure and
/// safe to share. Positions absent from the table (UTG and MP in the
/// standard data) and the intentionally empty BB range both answer `false`
/// for every hand.
#[derive(Debug, Clone)]
pub struct RangeTable {
    ranges: FxHashMap<Position, FxHashSet<String>>,
}

impl RangeTable {
    /// Build a table from (position, notation list) groups.
    ///
    /// Every notation must be well-formed canonical form with the higher
    /// rank first, and each position's list must be duplicate-free.
    pub fn from_groups(groups: &[(Position, &[&str])]) -> Result<Self, RangeTableError> {
        let mut ranges: FxHashMap<Position, FxHashSet<String>> = FxHashMap::default();

        for (position, hands) in groups {
            let entry = ranges.entry(*position).or_default();
            for hand in *hands {
                validate_notation(hand)?;
                if !entry.insert((*hand).to_string()) {
                    return Err(RangeTableError::Duplicate(*position, (*hand).to_string()));
                }
            }
        }

        Ok(Self { ranges })
    }

    /// The built-in standard table, constructed once per process.
    pub fn standard() -> &'static RangeTable {
        static STANDARD: OnceLock<RangeTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Self::from_groups(STANDARD_RANGES).expect("built-in range data is canonical")
        })
    }

    /// Check whether two hole cards are in a position's opening range.
    ///
    /// Wrong card counts and positions without a defined range answer
    /// `false`; this never fails.
    pub fn is_in_range(&self, position: Position, hole: &[Card]) -> bool {
        match canonicalize(hole) {
            Some(notation) => self.contains(position, &notation),
            None => false,
        }
    }

    /// Check whether a canonical notation is in a position's range.
    pub fn contains(&self, position: Position, notation: &str) -> bool {
        self.ranges
            .get(&position)
            .is_some_and(|hands| hands.contains(notation))
    }

    /// Advise raise or fold for a spot.
    pub fn advise(&self, position: Position, hole: &[Card]) -> RangeAction {
        RangeAction::from_membership(self.is_in_range(position, hole))
    }

    /// Get a position's range, if one is defined.
    pub fn range(&self, position: Position) -> Option<&FxHashSet<String>> {
        self.ranges.get(&position)
    }

    /// Positions with a defined (possibly empty) range, in action order.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.ranges.keys().copied().collect();
        positions.sort_by_key(|p| p.index());
        positions
    }
}

/// Validate a single canonical hand notation.
fn validate_notation(hand: &str) -> Result<(), RangeTableError> {
    let chars: Vec<char> = hand.chars().collect();

    let (r1, r2) = match chars.len() {
        2 | 3 => (parse_rank(chars[0])?, parse_rank(chars[1])?),
        _ => return Err(RangeTableError::InvalidFormat(hand.to_string())),
    };

    if chars.len() == 2 {
        if r1 != r2 {
            // Two unequal ranks with no suffix is ambiguous, not a pair.
            return Err(RangeTableError::InvalidFormat(hand.to_string()));
        }
        return Ok(());
    }

    match chars[2] {
        's' | 'o' => {}
        other => return Err(RangeTableError::InvalidSuffix(other)),
    }
    if r1 == r2 {
        // Pairs take no suffix.
        return Err(RangeTableError::InvalidFormat(hand.to_string()));
    }
    if r1 < r2 {
        return Err(RangeTableError::LowRankFirst(hand.to_string()));
    }

    Ok(())
}

/// Parse a single rank character (2-9, T, J, Q, K, A).
fn parse_rank(c: char) -> Result<u8, RangeTableError> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c)
        .map(|i| i as u8)
        .ok_or(RangeTableError::InvalidRank(c))
}

/// Errors that can occur when building a range table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeTableError {
    /// Notation is not a pair or a suffixed two-rank hand.
    InvalidFormat(String),
    /// A rank character is not one of 2-9, T, J, Q, K, A.
    InvalidRank(char),
    /// The suffix is not 's' or 'o'.
    InvalidSuffix(char),
    /// The lower rank was written first; tables are authored high-first.
    LowRankFirst(String),
    /// The same notation appears twice in one position's list.
    Duplicate(Position, String),
}

impl fmt::Display for RangeTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid hand notation: {}", s),
            Self::InvalidRank(c) => write!(f, "Invalid rank character: {}", c),
            Self::InvalidSuffix(c) => write!(f, "Invalid suffix: {} (expected 's' or 'o')", c),
            Self::LowRankFirst(s) => {
                write!(f, "Notation {} must list the higher rank first", s)
            }
            Self::Duplicate(position, s) => {
                write!(f, "Duplicate hand {} in {} range", s, position)
            }
        }
    }
}

impl std::error::Error for RangeTableError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect()
    }

    #[test]
    fn test_canonicalize_pair() {
        assert_eq!(canonicalize(&cards("Ks Kh")).as_deref(), Some("KK"));
    }

    #[test]
    fn test_canonicalize_suited_and_offsuit() {
        assert_eq!(canonicalize(&cards("As Ks")).as_deref(), Some("AKs"));
        assert_eq!(canonicalize(&cards("As Kh")).as_deref(), Some("AKo"));
    }

    #[test]
    fn test_canonicalize_is_order_independent() {
        assert_eq!(canonicalize(&cards("Ks As")).as_deref(), Some("AKs"));
        assert_eq!(canonicalize(&cards("2d 7c")).as_deref(), Some("72o"));
    }

    #[test]
    fn test_canonicalize_rejects_wrong_counts() {
        assert_eq!(canonicalize(&[]), None);
        assert_eq!(canonicalize(&cards("As")), None);
        assert_eq!(canonicalize(&cards("As Ks Qs")), None);
    }

    #[test]
    fn test_standard_table_builds() {
        let table = RangeTable::standard();
        assert_eq!(
            table.positions(),
            vec![Position::LJ, Position::HJ, Position::CO, Position::BTN, Position::SB, Position::BB]
        );
        assert_eq!(table.range(Position::LJ).unwrap().len(), 35);
    }

    #[test]
    fn test_aces_in_range_everywhere_defined() {
        let table = RangeTable::standard();
        let aces = cards("As Ah");
        for position in [Position::LJ, Position::HJ, Position::CO, Position::BTN, Position::SB] {
            assert!(table.is_in_range(position, &aces), "AA out of range for {}", position);
        }
    }

    #[test]
    fn test_bb_range_is_empty() {
        let table = RangeTable::standard();
        assert!(table.range(Position::BB).unwrap().is_empty());
        assert!(!table.is_in_range(Position::BB, &cards("As Ah")));
        assert!(!table.is_in_range(Position::BB, &cards("2c 7d")));
    }

    #[test]
    fn test_undefined_positions_are_out_of_range() {
        let table = RangeTable::standard();
        assert!(table.range(Position::UTG).is_none());
        assert!(!table.is_in_range(Position::UTG, &cards("As Ah")));
        assert!(!table.is_in_range(Position::MP, &cards("As Ah")));
    }

    #[test]
    fn test_range_widens_with_position() {
        let table = RangeTable::standard();
        let lj = table.range(Position::LJ).unwrap().len();
        let hj = table.range(Position::HJ).unwrap().len();
        let co = table.range(Position::CO).unwrap().len();
        let btn = table.range(Position::BTN).unwrap().len();
        let sb = table.range(Position::SB).unwrap().len();
        assert!(lj < hj && hj < co && co < btn && btn < sb);
    }

    #[test]
    fn test_membership_details() {
        let table = RangeTable::standard();
        // 76s opens from the cutoff but not earlier.
        assert!(!table.is_in_range(Position::HJ, &cards("7h 6h")));
        assert!(table.is_in_range(Position::CO, &cards("7h 6h")));
        // Offsuit version of an in-range suited hand is not in range.
        assert!(table.is_in_range(Position::LJ, &cards("Th 9h")));
        assert!(!table.is_in_range(Position::LJ, &cards("Th 9c")));
        // Selection order does not matter.
        assert!(table.is_in_range(Position::LJ, &cards("9h Th")));
    }

    #[test]
    fn test_wrong_card_count_is_out_of_range() {
        let table = RangeTable::standard();
        assert!(!table.is_in_range(Position::BTN, &[]));
        assert!(!table.is_in_range(Position::BTN, &cards("As")));
        assert!(!table.is_in_range(Position::BTN, &cards("As Ks Qs")));
    }

    #[test]
    fn test_advise_labels() {
        let table = RangeTable::standard();
        assert_eq!(table.advise(Position::LJ, &cards("As Ah")), RangeAction::Raise);
        assert_eq!(table.advise(Position::LJ, &cards("7c 2d")), RangeAction::Fold);
        assert_eq!(RangeAction::Raise.to_string(), "RAISE");
        assert_eq!(RangeAction::Fold.to_string(), "FOLD");
    }

    #[test]
    fn test_from_groups_rejects_duplicates() {
        let result = RangeTable::from_groups(&[(Position::LJ, &["AA", "AKs", "AA"])]);
        assert_eq!(
            result.unwrap_err(),
            RangeTableError::Duplicate(Position::LJ, "AA".to_string())
        );
    }

    #[test]
    fn test_from_groups_rejects_bad_notation() {
        assert_eq!(
            RangeTable::from_groups(&[(Position::LJ, &["AKx"])]).unwrap_err(),
            RangeTableError::InvalidSuffix('x')
        );
        assert_eq!(
            RangeTable::from_groups(&[(Position::LJ, &["A1s"])]).unwrap_err(),
            RangeTableError::InvalidRank('1')
        );
        assert_eq!(
            RangeTable::from_groups(&[(Position::LJ, &["KAs"])]).unwrap_err(),
            RangeTableError::LowRankFirst("KAs".to_string())
        );
        assert_eq!(
            RangeTable::from_groups(&[(Position::LJ, &["AK"])]).unwrap_err(),
            RangeTableError::InvalidFormat("AK".to_string())
        );
        assert_eq!(
            RangeTable::from_groups(&[(Position::LJ, &["AAs"])]).unwrap_err(),
            RangeTableError::InvalidFormat("AAs".to_string())
        );
        assert_eq!(
            RangeTable::from_groups(&[(Position::LJ, &["AKQs"])]).unwrap_err(),
            RangeTableError::InvalidFormat("AKQs".to_string())
        );
    }

    #[test]
    fn test_standard_data_passes_validation() {
        assert!(RangeTable::from_groups(STANDARD_RANGES).is_ok());
    }

    #[test]
    fn test_idempotence() {
        let table = RangeTable::standard();
        let hole = cards("Qd Jd");
        assert_eq!(
            table.is_in_range(Position::CO, &hole),
            table.is_in_range(Position::CO, &hole)
        );
    }
}

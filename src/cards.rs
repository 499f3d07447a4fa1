//! Card primitives for the trainer.
//!
//! This module provides the value types both trainer components consume:
//! - `Card`: a single playing card with rank and suit
//! - `Hand`: a player's two hole cards, kept in selection order
//! - `Stage`: the betting stage, which bounds the community card count
//! - `Deck`: a shuffleable deck of 52 cards for dealing practice spots

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Rank of a card (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Suit of a card (0-3).
pub const SUIT_CLUBS: u8 = 0;
pub const SUIT_DIAMONDS: u8 = 1;
pub const SUIT_HEARTS: u8 = 2;
pub const SUIT_SPADES: u8 = 3;

/// Rank characters for display and parsing.
pub(crate) const RANK_CHARS: [char; 13] =
    ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display and parsing.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13, "rank must be 0-12");
        debug_assert!(suit < 4, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Parse a card from a string like "As", "Kh", "2c".
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return None;
        }

        let rank = RANK_CHARS.iter().position(|&c| c == chars[0].to_ascii_uppercase())?;
        let suit = SUIT_CHARS.iter().position(|&c| c == chars[1].to_ascii_lowercase())?;

        Some(Self::new(rank as u8, suit as u8))
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Whether the rank is a broadway card that counts as "high" for the
    /// estimator (J, Q, K, A).
    #[inline]
    pub fn is_high(&self) -> bool {
        self.rank() >= RANK_J
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A player's two hole cards.
///
/// Cards are kept in the order they were supplied; ordering by rank is a
/// canonicalization concern, handled in [`crate::advisor`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// First card as selected.
    pub card1: Card,
    /// Second card as selected.
    pub card2: Card,
}

impl Hand {
    /// Create a hand from two cards.
    pub fn new(card1: Card, card2: Card) -> Self {
        Self { card1, card2 }
    }

    /// Create a hand from a slice, which must hold exactly two cards.
    pub fn from_cards(cards: &[Card]) -> Option<Self> {
        match cards {
            [c1, c2] => Some(Self::new(*c1, *c2)),
            _ => None,
        }
    }

    /// Parse a hand from a string like "AhKs" or "Ah Ks".
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.replace(' ', "");
        if s.len() != 4 {
            return None;
        }
        let c1 = Card::from_str(&s[0..2])?;
        let c2 = Card::from_str(&s[2..4])?;
        Some(Self::new(c1, c2))
    }

    /// Check if the hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if the hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// The two cards sorted high rank first.
    pub fn high_first(&self) -> (Card, Card) {
        if self.card1.rank() >= self.card2.rank() {
            (self.card1, self.card2)
        } else {
            (self.card2, self.card1)
        }
    }

    /// Get both cards as an array, in selection order.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }

    /// Check if a card is one of these hole cards.
    pub fn contains(&self, card: Card) -> bool {
        self.card1.id() == card.id() || self.card2.id() == card.id()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Betting stage of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Stage {
    /// All stages in betting order.
    pub fn all() -> &'static [Stage] {
        &[Stage::Preflop, Stage::Flop, Stage::Turn, Stage::River]
    }

    /// Get the next stage, or `None` at the river.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Preflop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => None,
        }
    }

    /// Get stage index (0-3).
    pub fn index(&self) -> usize {
        match self {
            Stage::Preflop => 0,
            Stage::Flop => 1,
            Stage::Turn => 2,
            Stage::River => 3,
        }
    }

    /// Maximum number of community cards allowed at this stage.
    pub fn max_community_cards(&self) -> usize {
        match self {
            Stage::Preflop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
            Stage::River => 5,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Preflop => write!(f, "Preflop"),
            Stage::Flop => write!(f, "Flop"),
            Stage::Turn => write!(f, "Turn"),
            Stage::River => write!(f, "River"),
        }
    }
}

/// A deck of 52 playing cards.
#[derive(Clone)]
pub struct Deck {
    /// All 52 cards in current order.
    cards: [Card; 52],
    /// Index of next card to deal.
    index: usize,
}

impl Deck {
    /// Create a new deck in standard order.
    pub fn new() -> Self {
        let mut cards = [Card::from_id(0); 52];
        for (i, slot) in cards.iter_mut().enumerate() {
            *slot = Card::from_id(i as u8);
        }
        Self { cards, index: 0 }
    }

    /// Shuffle the remaining cards in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.index..].shuffle(rng);
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        if self.index >= 52 {
            return None;
        }
        let card = self.cards[self.index];
        self.index += 1;
        Some(card)
    }

    /// Deal multiple cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(n);
        for _ in 0..n {
            match self.deal() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// Get the number of remaining cards.
    pub fn remaining(&self) -> usize {
        52 - self.index
    }

    /// Reset the deck to standard order.
    pub fn reset(&mut self) {
        self.index = 0;
        for (i, slot) in self.cards.iter_mut().enumerate() {
            *slot = Card::from_id(i as u8);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

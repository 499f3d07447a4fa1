//! Training session state.
//!
//! A `Session` is the explicit selection state a UI shell threads through
//! the trainer: the chosen position, up to two hole cards, the community
//! cards the current stage allows, and the stage itself. The session owns
//! all mutation; the estimator and range table stay pure and are handed a
//! fully-formed view of the selections.

use crate::advisor::{canonicalize, RangeAction, RangeTable};
use crate::cards::{Card, Stage};
use crate::estimator::{Estimate, Estimator};
use crate::position::Position;

/// One training session's selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    position: Option<Position>,
    hole: Vec<Card>,
    community: Vec<Card>,
    stage: Stage,
}

impl Session {
    /// Start a fresh session: no selections, preflop.
    pub fn new() -> Self {
        Self {
            position: None,
            hole: Vec::with_capacity(2),
            community: Vec::with_capacity(5),
            stage: Stage::Preflop,
        }
    }

    /// The selected position, if any.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The selected hole cards.
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// The selected community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The current betting stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Select (or change) the hero's position.
    pub fn select_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Check if a card is already selected anywhere in the session.
    pub fn is_card_used(&self, card: Card) -> bool {
        self.hole.contains(&card) || self.community.contains(&card)
    }

    /// Add a hole card. Returns `false` if both hole cards are already
    /// selected or the card is in use.
    pub fn select_hole(&mut self, card: Card) -> bool {
        if self.hole.len() >= 2 || self.is_card_used(card) {
            return false;
        }
        self.hole.push(card);
        true
    }

    /// Add a community card. Returns `false` if the stage's board is full
    /// or the card is in use.
    pub fn select_community(&mut self, card: Card) -> bool {
        if self.community.len() >= self.stage.max_community_cards() || self.is_card_used(card) {
            return false;
        }
        self.community.push(card);
        true
    }

    /// Whether the board holds every card the current stage allows.
    pub fn board_is_full(&self) -> bool {
        self.community.len() == self.stage.max_community_cards()
    }

    /// Advance to the next stage.
    ///
    /// Only moves when the current board is complete and a next stage
    /// exists; stages never go backwards. Returns `true` on a move.
    pub fn advance_stage(&mut self) -> bool {
        if !self.board_is_full() {
            return false;
        }
        match self.stage.next() {
            Some(next) => {
                self.stage = next;
                true
            }
            None => false,
        }
    }

    /// Clear every selection and return to preflop.
    pub fn reset(&mut self) {
        self.position = None;
        self.hole.clear();
        self.community.clear();
        self.stage = Stage::Preflop;
    }

    /// Canonical notation of the selected hole cards, once both are picked.
    pub fn hand_notation(&self) -> Option<String> {
        canonicalize(&self.hole)
    }

    /// Run the equity estimator over the current selections.
    pub fn estimate(&self, estimator: &Estimator) -> Estimate {
        estimator.estimate(&self.hole, self.position, &self.community, self.stage)
    }

    /// Look up range advice for the current selections.
    ///
    /// `None` until a position and both hole cards are selected, matching
    /// the advisor's empty-advice state.
    pub fn range_advice(&self, table: &RangeTable) -> Option<RangeAction> {
        let position = self.position?;
        if self.hole.len() != 2 {
            return None;
        }
        Some(table.advise(position, &self.hole))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.position(), None);
        assert!(session.hole().is_empty());
        assert!(session.community().is_empty());
        assert_eq!(session.stage(), Stage::Preflop);
    }

    #[test]
    fn test_hole_capacity_and_duplicates() {
        let mut session = Session::new();
        assert!(session.select_hole(card("As")));
        assert!(!session.select_hole(card("As")));
        assert!(session.select_hole(card("Kd")));
        assert!(!session.select_hole(card("Qc")));
        assert_eq!(session.hole().len(), 2);
    }

    #[test]
    fn test_community_respects_stage_limit() {
        let mut session = Session::new();
        session.select_hole(card("As"));
        session.select_hole(card("Kd"));

        // Preflop board holds nothing.
        assert!(!session.select_community(card("Qc")));

        assert!(session.advance_stage()); // empty board is full preflop
        assert_eq!(session.stage(), Stage::Flop);

        assert!(session.select_community(card("Qc")));
        assert!(session.select_community(card("Jh")));
        assert!(session.select_community(card("9s")));
        assert!(!session.select_community(card("2d")));
        assert_eq!(session.community().len(), 3);
    }

    #[test]
    fn test_community_rejects_hole_cards() {
        let mut session = Session::new();
        session.select_hole(card("As"));
        session.select_hole(card("Kd"));
        session.advance_stage();
        assert!(!session.select_community(card("As")));
    }

    #[test]
    fn test_stage_advance_requires_full_board() {
        let mut session = Session::new();
        session.advance_stage();
        assert_eq!(session.stage(), Stage::Flop);

        // Two of three flop cards: stuck.
        session.select_community(card("Qc"));
        session.select_community(card("Jh"));
        assert!(!session.advance_stage());
        assert_eq!(session.stage(), Stage::Flop);

        session.select_community(card("9s"));
        assert!(session.advance_stage());
        assert_eq!(session.stage(), Stage::Turn);

        session.select_community(card("2d"));
        assert!(session.advance_stage());
        session.select_community(card("3d"));
        assert!(!session.advance_stage()); // river is terminal
        assert_eq!(session.stage(), Stage::River);
    }

    #[test]
    fn test_reset() {
        let mut session = Session::new();
        session.select_position(Position::BTN);
        session.select_hole(card("As"));
        session.select_hole(card("Kd"));
        session.advance_stage();
        session.select_community(card("Qc"));

        session.reset();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_estimate_passthrough() {
        let estimator = Estimator::default();
        let mut session = Session::new();
        session.select_position(Position::BTN);
        session.select_hole(card("As"));
        session.select_hole(card("Ah"));

        let result = session.estimate(&estimator);
        assert_eq!(result.score, 100);

        // Incomplete hole cards still produce a displayable result.
        session.reset();
        assert_eq!(session.estimate(&estimator).score, 0);
    }

    #[test]
    fn test_range_advice_gating() {
        let table = RangeTable::standard();
        let mut session = Session::new();
        assert_eq!(session.range_advice(table), None);

        session.select_position(Position::LJ);
        assert_eq!(session.range_advice(table), None);

        session.select_hole(card("As"));
        session.select_hole(card("Ah"));
        assert_eq!(session.range_advice(table), Some(RangeAction::Raise));
        assert_eq!(session.hand_notation().as_deref(), Some("AA"));

        session.select_position(Position::BB);
        assert_eq!(session.range_advice(table), Some(RangeAction::Fold));
    }
}

//! Heuristic equity estimation.
//!
//! This module implements the trainer's winning-probability heuristic: a
//! deterministic, closed-form score over the hole cards, position, and any
//! community cards, plus a per-stage advice label. It is not an equity
//! calculator; there is no sampling and no opponent modeling, just the
//! fixed multiplier schedule the training widget teaches from.

mod config;

pub use config::{AdviceLadder, ConfigError, EstimatorConfig};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Hand, Stage};
use crate::position::Position;

/// Advice returned when no ladder is configured for the requested stage.
pub const UNKNOWN_STAGE_ADVICE: &str = "Unknown stage";

/// Result of one estimation: a capped score and its advice label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Winning-probability score in [0, 100].
    pub score: u8,
    /// Advice text selected from the stage's threshold ladder.
    pub advice: String,
}

/// The heuristic equity estimator.
///
/// A pure function of its inputs: no randomness, no hidden state, safe to
/// share across callers. Every input shape produces a result; degenerate
/// inputs (fewer or more than two hole cards) score 0 rather than failing.
///
/// # Example
/// ```
/// use holdem_trainer::cards::{Card, Stage};
/// use holdem_trainer::estimator::Estimator;
/// use holdem_trainer::position::Position;
///
/// let estimator = Estimator::default();
/// let hole = [Card::from_str("As").unwrap(), Card::from_str("Ah").unwrap()];
/// let result = estimator.estimate(&hole, Some(Position::BTN), &[], Stage::Preflop);
/// assert_eq!(result.score, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Access the configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the winning probability of a spot.
    ///
    /// `hole` must hold exactly two cards for a real estimate; anything
    /// else scores 0 with the stage's weakest advice. `community` may hold
    /// 0-5 cards; the caller is responsible for not exceeding the stage's
    /// maximum, but any count up to a full board is handled.
    pub fn estimate(
        &self,
        hole: &[Card],
        position: Option<Position>,
        community: &[Card],
        stage: Stage,
    ) -> Estimate {
        let score = self.score(hole, position, community);
        Estimate {
            score,
            advice: self.advice(score, stage),
        }
    }

    /// Compute the raw score in [0, 100] for a spot.
    pub fn score(&self, hole: &[Card], position: Option<Position>, community: &[Card]) -> u8 {
        let hand = match Hand::from_cards(hole) {
            Some(hand) => hand,
            None => return 0,
        };

        let cfg = &self.config;
        let mut probability = cfg.base_rate * cfg.position_weight(position);

        if hand.is_pair() {
            probability *= cfg.pair_bonus;
        }
        if hand.is_suited() {
            probability *= cfg.suited_bonus;
        }
        if hand.card1.is_high() && hand.card2.is_high() {
            probability *= cfg.high_card_bonus;
        }

        if !community.is_empty() {
            let mut rank_counts = [0u8; 13];
            let mut suit_counts = [0u8; 4];
            for card in hole.iter().chain(community.iter()) {
                rank_counts[card.rank() as usize] += 1;
                suit_counts[card.suit() as usize] += 1;
            }

            // Each qualifying rank group compounds; a pocket pair that
            // stays unimproved still counts as its own group of two.
            for count in rank_counts {
                match count {
                    0 | 1 => {}
                    2 => probability *= cfg.paired_rank_bonus,
                    3 => probability *= cfg.trips_rank_bonus,
                    _ => probability *= cfg.quads_rank_bonus,
                }
            }

            // Both flush thresholds can fire for the same suit.
            for count in suit_counts {
                if count >= 4 {
                    probability *= cfg.four_flush_bonus;
                }
                if count >= 5 {
                    probability *= cfg.five_flush_bonus;
                }
            }
        }

        ((probability * 100.0).round() as i64).clamp(0, 100) as u8
    }

    /// Select the advice label for a score at a stage.
    pub fn advice(&self, score: u8, stage: Stage) -> String {
        match self.config.ladder(stage) {
            Some(ladder) => ladder.label_for(score).to_string(),
            None => UNKNOWN_STAGE_ADVICE.to_string(),
        }
    }
}

//! Configuration for the equity estimator.
//!
//! All of the heuristic's constants live here as plain data: the position
//! weight table, the hole-card and board bonus multipliers, and the
//! per-stage advice ladders. `Default` carries the standard trainer
//! numbers.

use serde::{Deserialize, Serialize};

use crate::cards::Stage;
use crate::position::Position;

/// An ordered ladder of (threshold, label) advice bands for one stage.
///
/// Bands are evaluated top-down: the first band whose threshold the score
/// exceeds wins, so thresholds must be strictly descending. A score that
/// clears no band gets the fallback label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceLadder {
    /// Descending (threshold, label) pairs; a score must be strictly
    /// greater than the threshold to take the label.
    pub bands: Vec<(u8, String)>,
    /// Label for scores below every threshold.
    pub fallback: String,
}

impl AdviceLadder {
    /// Create a ladder from descending bands and a fallback label.
    pub fn new(bands: Vec<(u8, &str)>, fallback: &str) -> Self {
        Self {
            bands: bands.into_iter().map(|(t, s)| (t, s.to_string())).collect(),
            fallback: fallback.to_string(),
        }
    }

    /// Select the label for a score, strongest band first.
    pub fn label_for(&self, score: u8) -> &str {
        for (threshold, label) in &self.bands {
            if score > *threshold {
                return label;
            }
        }
        &self.fallback
    }

    /// Check that thresholds are strictly descending.
    fn is_descending(&self) -> bool {
        self.bands.windows(2).all(|w| w[0].0 > w[1].0)
    }
}

/// Configuration for the heuristic equity estimator.
///
/// # Example
/// ```
/// use holdem_trainer::estimator::EstimatorConfig;
///
/// let config = EstimatorConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Starting probability before any multipliers are applied.
    pub base_rate: f64,

    /// Per-position weight applied first. Positions not listed here (and
    /// evaluations with no position selected) use a neutral 1.0.
    pub position_weights: Vec<(Position, f64)>,

    /// Multiplier when the hole cards share a rank.
    pub pair_bonus: f64,

    /// Multiplier when the hole cards share a suit.
    pub suited_bonus: f64,

    /// Multiplier when both hole ranks are broadway cards (J, Q, K, A).
    pub high_card_bonus: f64,

    /// Multiplier per rank appearing exactly twice across hole + board.
    pub paired_rank_bonus: f64,

    /// Multiplier per rank appearing exactly three times.
    pub trips_rank_bonus: f64,

    /// Multiplier per rank appearing four or more times.
    pub quads_rank_bonus: f64,

    /// Multiplier per suit appearing four or more times across hole + board.
    pub four_flush_bonus: f64,

    /// Additional multiplier per suit appearing five or more times.
    /// Compounds with `four_flush_bonus` for the same suit.
    pub five_flush_bonus: f64,

    /// Advice ladders by stage. A stage with no ladder configured yields
    /// the "Unknown stage" label.
    pub ladders: Vec<(Stage, AdviceLadder)>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_rate: 0.5,
            position_weights: vec![
                (Position::BTN, 1.2),
                (Position::CO, 1.1),
                (Position::MP, 1.0),
                (Position::UTG, 0.9),
                (Position::SB, 0.8),
                (Position::BB, 0.7),
            ],
            pair_bonus: 1.5,
            suited_bonus: 1.2,
            high_card_bonus: 1.3,
            paired_rank_bonus: 1.2,
            trips_rank_bonus: 1.5,
            quads_rank_bonus: 2.0,
            four_flush_bonus: 1.3,
            five_flush_bonus: 1.5,
            ladders: vec![
                (
                    Stage::Preflop,
                    AdviceLadder::new(
                        vec![
                            (70, "Strong hand - Consider raising"),
                            (50, "Decent hand - Consider calling or raising"),
                            (30, "Marginal hand - Proceed with caution"),
                        ],
                        "Weak hand - Consider folding",
                    ),
                ),
                (
                    Stage::Flop,
                    AdviceLadder::new(
                        vec![
                            (75, "Strong hand - Consider value betting"),
                            (60, "Good hand - Consider betting for value"),
                            (40, "Drawing hand - Consider pot odds"),
                        ],
                        "Weak hand - Consider checking/folding",
                    ),
                ),
                (
                    Stage::Turn,
                    AdviceLadder::new(
                        vec![
                            (80, "Very strong hand - Consider value betting"),
                            (65, "Strong hand - Consider betting"),
                            (45, "Moderate hand - Consider pot odds"),
                        ],
                        "Weak hand - Consider folding to aggression",
                    ),
                ),
                (
                    Stage::River,
                    AdviceLadder::new(
                        vec![
                            (80, "Very strong hand - Consider value betting"),
                            (65, "Strong hand - Consider betting"),
                            (45, "Moderate hand - Consider pot odds"),
                        ],
                        "Weak hand - Consider folding to aggression",
                    ),
                ),
            ],
        }
    }
}

impl EstimatorConfig {
    /// Create a config with the standard constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the base rate.
    pub fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.base_rate = base_rate;
        self
    }

    /// Builder method: set or replace the weight for one position.
    pub fn with_position_weight(mut self, position: Position, weight: f64) -> Self {
        if let Some(entry) = self.position_weights.iter_mut().find(|(p, _)| *p == position) {
            entry.1 = weight;
        } else {
            self.position_weights.push((position, weight));
        }
        self
    }

    /// Builder method: set or replace the ladder for one stage.
    pub fn with_ladder(mut self, stage: Stage, ladder: AdviceLadder) -> Self {
        if let Some(entry) = self.ladders.iter_mut().find(|(s, _)| *s == stage) {
            entry.1 = ladder;
        } else {
            self.ladders.push((stage, ladder));
        }
        self
    }

    /// Look up the weight for a position, 1.0 when unknown or unset.
    pub fn position_weight(&self, position: Option<Position>) -> f64 {
        position
            .and_then(|p| {
                self.position_weights
                    .iter()
                    .find(|(pos, _)| *pos == p)
                    .map(|(_, w)| *w)
            })
            .unwrap_or(1.0)
    }

    /// Look up the advice ladder for a stage.
    pub fn ladder(&self, stage: Stage) -> Option<&AdviceLadder> {
        self.ladders.iter().find(|(s, _)| *s == stage).map(|(_, l)| l)
    }

    /// Validate the configuration and return any errors.
    ///
    /// Bonus multipliers must be at least 1.0 so that adding a qualifying
    /// condition never lowers a score; position weights need only be
    /// positive (early positions legitimately weigh below 1.0).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_rate <= 0.0 {
            return Err(ConfigError::NonPositiveWeight("base_rate", self.base_rate));
        }

        for (position, weight) in &self.position_weights {
            if *weight <= 0.0 {
                return Err(ConfigError::NonPositiveWeight(position.name(), *weight));
            }
        }

        let bonuses = [
            ("pair_bonus", self.pair_bonus),
            ("suited_bonus", self.suited_bonus),
            ("high_card_bonus", self.high_card_bonus),
            ("paired_rank_bonus", self.paired_rank_bonus),
            ("trips_rank_bonus", self.trips_rank_bonus),
            ("quads_rank_bonus", self.quads_rank_bonus),
            ("four_flush_bonus", self.four_flush_bonus),
            ("five_flush_bonus", self.five_flush_bonus),
        ];
        for (name, value) in bonuses {
            if value < 1.0 {
                return Err(ConfigError::BonusBelowOne(name, value));
            }
        }

        for (stage, ladder) in &self.ladders {
            if !ladder.is_descending() {
                return Err(ConfigError::UnorderedLadder(*stage));
            }
        }

        Ok(())
    }
}

/// Errors that can occur when validating estimator configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// A weight that must be positive is zero or negative.
    NonPositiveWeight(&'static str, f64),
    /// A bonus multiplier is below 1.0 and would penalize a made condition.
    BonusBelowOne(&'static str, f64),
    /// A ladder's thresholds are not strictly descending.
    UnorderedLadder(Stage),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveWeight(name, val) => {
                write!(f, "Weight {} must be positive, got {}", name, val)
            }
            ConfigError::BonusBelowOne(name, val) => {
                write!(f, "Bonus {} must be at least 1.0, got {}", name, val)
            }
            ConfigError::UnorderedLadder(stage) => {
                write!(f, "{} advice ladder thresholds must be strictly descending", stage)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

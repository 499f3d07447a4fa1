//! # Hold'em Trainer
//!
//! Core computations for two poker training widgets: a heuristic
//! hand-strength estimator and a preflop opening-range advisor. Both are
//! pure, synchronous functions over small fixed-size inputs; a UI shell
//! owns all interaction and calls in with fully-formed selections.
//!
//! ## Components
//!
//! - **Equity estimator** ([`estimator`]): hole cards + position +
//!   community cards + betting stage map to a 0-100 score through a fixed
//!   multiplier schedule, then to an advice label through per-stage
//!   threshold ladders. Deterministic, no sampling.
//! - **Range advisor** ([`advisor`]): canonicalizes a two-card hand to
//!   standard notation ("AA", "AKs", "AKo") and reports strict membership
//!   in a hand-authored per-position opening range.
//!
//! The two components share the card primitives but no data flows between
//! them. Every edge case (wrong card counts, positions a component has no
//! data for, stages with no configured ladder) resolves to a safe default
//! rather than an error, so callers always get a displayable value.
//!
//! ## Quick Start
//!
//! ```
//! use holdem_trainer::advisor::RangeTable;
//! use holdem_trainer::cards::{Card, Stage};
//! use holdem_trainer::estimator::Estimator;
//! use holdem_trainer::position::Position;
//!
//! let hole = [Card::from_str("Ah").unwrap(), Card::from_str("Kh").unwrap()];
//!
//! let estimate = Estimator::default()
//!     .estimate(&hole, Some(Position::CO), &[], Stage::Preflop);
//! assert!(estimate.score <= 100);
//!
//! assert!(RangeTable::standard().is_in_range(Position::CO, &hole));
//! ```

#![warn(missing_docs)]

/// Preflop range advice: hand canonicalization and range membership.
pub mod advisor;

/// Card, hand, stage, and deck primitives.
pub mod cards;

/// Heuristic winning-probability estimation.
pub mod estimator;

/// Table position labels.
pub mod position;

/// Explicit selection state for one training session.
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use advisor::{canonicalize, RangeAction, RangeTable};
pub use cards::{Card, Deck, Hand, Stage};
pub use estimator::{Estimate, Estimator, EstimatorConfig};
pub use position::Position;
pub use session::Session;

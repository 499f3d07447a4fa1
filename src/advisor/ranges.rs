//! Standard opening ranges by position.
//!
//! Hand-authored raise-first-in charts, one list per position, in plain
//! canonical notation (higher rank first, `s`/`o` suffix for non-pairs).
//! The BB list is intentionally empty: no opening range is defined for the
//! big blind, which reads as "not in range" for every hand rather than
//! "never play."

use crate::position::Position;

/// LJ opening range.
pub const LJ_RANGE: &[&str] = &[
    "AA", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "KK", "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "AQo", "KQo", "QQ", "QJs", "QTs",
    "Q9s", "AJo", "JJ", "JTs", "TT", "T9s", "99", "88", "77",
];

/// HJ opening range.
pub const HJ_RANGE: &[&str] = &[
    "AA", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "KK", "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "AQo", "KQo", "QQ", "QJs",
    "QTs", "Q9s", "Q8s", "AJo", "KJo", "QJo", "JJ", "JTs", "J9s", "ATo", "KTo", "TT", "T9s",
    "99", "88", "77", "66",
];

/// CO opening range.
pub const CO_RANGE: &[&str] = &[
    "AA", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "KK", "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "AQo", "KQo",
    "QQ", "QJs", "QTs", "Q9s", "Q8s", "AJo", "KJo", "QJo", "JJ", "JTs", "J9s", "J8s", "ATo",
    "KTo", "QTo", "JTo", "TT", "T9s", "T8s", "A9o", "99", "98s", "88", "87s", "77", "76s",
    "66", "55", "44",
];

/// BTN opening range.
pub const BTN_RANGE: &[&str] = &[
    "AA", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "KK", "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s",
    "AQo", "KQo", "QQ", "QJs", "QTs", "Q9s", "Q8s", "Q7s", "Q6s", "Q5s", "Q4s", "Q3s", "AJo",
    "KJo", "QJo", "JJ", "JTs", "J9s", "J8s", "J7s", "J6s", "J5s", "ATo", "KTo", "QTo", "JTo",
    "TT", "T9s", "T8s", "T7s", "T6s", "A9o", "K9o", "Q9o", "J9o", "T9o", "99", "98s", "97s",
    "96s", "A8o", "K8o", "88", "87s", "86s", "A7o", "77", "76s", "75s", "A6o", "66", "65s",
    "A5o", "55", "54s", "A4o", "44", "A3o", "33", "22",
];

/// SB opening range.
pub const SB_RANGE: &[&str] = &[
    "AA", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "KK", "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s",
    "AQo", "KQo", "QQ", "QJs", "QTs", "Q9s", "Q8s", "Q7s", "Q6s", "Q5s", "Q4s", "Q3s", "Q2s",
    "AJo", "KJo", "QJo", "JJ", "JTs", "J9s", "J8s", "J7s", "J6s", "J5s", "ATo", "KTo", "QTo",
    "JTo", "TT", "T9s", "T8s", "T7s", "T6s", "A9o", "K9o", "Q9o", "J9o", "T9o", "99", "98s",
    "97s", "96s", "A8o", "K8o", "88", "87s", "86s", "A7o", "77", "76s", "75s", "A6o", "66",
    "65s", "64s", "A5o", "55", "54s", "A4o", "44", "A3o", "33", "22",
];

/// BB opening range (none defined).
pub const BB_RANGE: &[&str] = &[];

/// The standard table as (position, hands) groups.
pub const STANDARD_RANGES: &[(Position, &[&str])] = &[
    (Position::LJ, LJ_RANGE),
    (Position::HJ, HJ_RANGE),
    (Position::CO, CO_RANGE),
    (Position::BTN, BTN_RANGE),
    (Position::SB, SB_RANGE),
    (Position::BB, BB_RANGE),
];

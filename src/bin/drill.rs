//! Training drill
//!
//! Deals random practice spots from a shuffled deck and prints what both
//! trainer components say about each: the heuristic score with its advice,
//! and the raise/fold range call for the dealt position.

use rand::seq::SliceRandom;

use holdem_trainer::advisor::RangeTable;
use holdem_trainer::cards::Deck;
use holdem_trainer::estimator::Estimator;
use holdem_trainer::position::Position;
use holdem_trainer::session::Session;

const NUM_SPOTS: usize = 10;

fn main() {
    println!("=== Preflop Drill ({} spots) ===\n", NUM_SPOTS);

    let mut rng = rand::thread_rng();
    let estimator = Estimator::default();
    let table = RangeTable::standard();
    let mut session = Session::new();

    for spot in 1..=NUM_SPOTS {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        session.reset();
        // Deck dealing cannot repeat a card, so both picks land.
        for card in deck.deal_n(2) {
            session.select_hole(card);
        }
        if let Some(&position) = Position::all().choose(&mut rng) {
            session.select_position(position);
        }

        let estimate = session.estimate(&estimator);
        let notation = session.hand_notation().unwrap_or_default();
        let position = session
            .position()
            .map(|p| p.name())
            .unwrap_or("--");

        print!(
            "[{:>2}/{}] {} {:<4} {:<4} score {:>3}  {}",
            spot,
            NUM_SPOTS,
            session
                .hole()
                .iter()
                .map(|c| c.to_string())
                .collect::<String>(),
            notation,
            position,
            estimate.score,
            estimate.advice,
        );

        match session.range_advice(table) {
            Some(action) => println!("  [{}]", action),
            None => println!(),
        }
    }
}

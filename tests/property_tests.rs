//! Property tests: invariants that hold for any seed and any click order.

mod common;

use common::seeded_game;
use memory_match::{Deck, GameConfig, GameRng, SelectionOutcome, SlotId};
use proptest::prelude::*;

/// One thing a player (or the clock) can do.
#[derive(Clone, Debug)]
enum Step {
    Pick(usize),
    Wait(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0usize..12).prop_map(Step::Pick),
        1 => (0u64..1500).prop_map(Step::Wait),
    ]
}

proptest! {
    /// Shuffling only reorders the faces.
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let config = GameConfig::default();
        let deck = Deck::shuffled(&config, &mut GameRng::new(seed)).unwrap();

        let mut shuffled: Vec<String> = deck.faces().iter().map(|f| f.to_string()).collect();
        let mut expected = config.faces.clone();
        shuffled.sort();
        expected.sort();

        prop_assert_eq!(shuffled, expected);
        prop_assert!(deck.face_counts().values().all(|&c| c == 2));
    }

    /// Any sequence of clicks and waits keeps every invariant.
    #[test]
    fn turn_invariants_hold(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..80)) {
        let mut game = seeded_game(seed);
        let mut completed_turns = 0u32;

        for step in steps {
            let matched_before: Vec<SlotId> = game
                .board()
                .iter()
                .filter(|(_, s)| s.matched)
                .map(|(slot, _)| slot)
                .collect();
            let tries_before = game.tries();
            let was_locked = !game.can_play();
            let snapshot_before = game.snapshot();

            match step {
                Step::Pick(position) => {
                    let outcome = game.handle_selection(position).unwrap();
                    if outcome.completes_turn() {
                        completed_turns += 1;
                        prop_assert_eq!(game.tries(), tries_before + 1);
                    } else {
                        prop_assert_eq!(game.tries(), tries_before);
                    }
                    if was_locked {
                        prop_assert!(outcome.is_ignored());
                        prop_assert_eq!(game.snapshot(), snapshot_before);
                    }
                    if let SelectionOutcome::Matched { .. } = outcome {
                        prop_assert!(game.can_play());
                    }
                }
                Step::Wait(ms) => {
                    game.advance_clock(ms);
                    prop_assert_eq!(game.tries(), tries_before);
                }
            }

            prop_assert!(game.pending().len() <= 1);
            prop_assert_eq!(game.tries(), completed_turns);
            prop_assert!(game.scheduler().pending() <= 1);
            for slot in matched_before {
                prop_assert!(game.board().is_matched(slot));
                prop_assert!(game.display().face(slot).is_some());
            }
            if game.can_play() {
                prop_assert!(!game.has_pending_hide());
            }
        }
    }
}

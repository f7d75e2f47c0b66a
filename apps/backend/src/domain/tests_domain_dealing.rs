use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{cards_per_seat, MAX_SEATS, MIN_SEATS, ROUND_COUNT};
use crate::domain::{test_gens, test_prelude};

#[test]
fn every_seat_count_and_round_deals_the_schedule() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for n in MIN_SEATS..=MAX_SEATS {
        for r in 0..ROUND_COUNT {
            let expected = cards_per_seat(r, n).unwrap() as usize;
            let hands = deal_hands(n, r, &mut rng).unwrap();
            assert_eq!(hands.len(), n as usize);
            assert!(hands.iter().all(|h| h.len() == expected), "n={n} r={r}");
            let total: usize = hands.iter().map(Vec::len).sum();
            assert_eq!(total, expected * n as usize);
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_dealt_cards_are_distinct(
        n in test_gens::seat_count(),
        r in test_gens::round_index(),
        seed in any::<u64>(),
    ) {
        let hands = deal_hands(n, r, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        let all: Vec<_> = hands.iter().flatten().collect();
        let unique: HashSet<_> = all.iter().collect();
        prop_assert_eq!(all.len(), unique.len());
        prop_assert_eq!(all.len(), cards_per_seat(r, n).unwrap() as usize * n as usize);
    }
}

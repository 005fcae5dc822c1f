//! Deck building: pick the colours for a level, pair them up, shuffle.

use rand::Rng;

use crate::models::{Card, Difficulty, CATALOG};

/// Builds a shuffled deck for `difficulty`.
///
/// The first `difficulty.pairs()` catalog colours are used (not a random
/// subset), each dealt twice with its own id.
pub fn build_deck<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Vec<Card> {
    let mut cards: Vec<Card> = CATALOG
        .iter()
        .take(difficulty.pairs())
        .flat_map(|color| [Card::new(*color), Card::new(*color)])
        .collect();

    shuffle(&mut cards, rng);
    cards
}

/// Unbiased in-place Fisher-Yates shuffle.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen index in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_deck_size_and_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        for level in Difficulty::ALL {
            let deck = build_deck(level, &mut rng);
            assert_eq!(deck.len(), level.pairs() * 2);

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for card in &deck {
                *counts.entry(card.color.name).or_default() += 1;
            }
            assert_eq!(counts.len(), level.pairs());
            assert!(counts.values().all(|&n| n == 2), "{counts:?}");

            let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), deck.len());
        }
    }

    #[test]
    fn test_deck_uses_catalog_prefix() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = build_deck(Difficulty::Easy, &mut rng);
        let names: HashSet<_> = deck.iter().map(|c| c.color.name).collect();
        assert_eq!(names, HashSet::from(["Red", "Blue", "Green"]));
    }

    #[test]
    fn test_deck_starts_face_down() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = build_deck(Difficulty::Medium, &mut rng);
        assert!(deck.iter().all(|c| !c.is_flipped && !c.is_matched));
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = build_deck(Difficulty::Hard, &mut rng);

        let mut before: Vec<&str> = deck.iter().map(|c| c.color.name).collect();
        shuffle(&mut deck, &mut rng);
        let mut after: Vec<&str> = deck.iter().map(|c| c.color.name).collect();

        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        shuffle(&mut a, &mut StdRng::seed_from_u64(99));
        shuffle(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_small_slices() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![5];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![5]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Every element should be able to land in every slot
        let mut seen = [[false; 4]; 4];
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            for (slot, &item) in items.iter().enumerate() {
                seen[item][slot] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&hit| hit));
    }
}

//! Queue module - next-piece randomizer
//!
//! Draws uniformly from the seven kinds and rejects a draw equal to the piece
//! just handed out, so the same kind never appears twice in a row. Longer
//! gaps are unconstrained (this is not a 7-bag).
//!
//! The generator is a seeded PCG, so a seed fixes the whole sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::ShapeKind;

/// Next-piece generator with a one-piece preview
#[derive(Debug, Clone)]
pub struct BlockQueue {
    next: ShapeKind,
    rng: Pcg32,
    seed: u64,
}

impl BlockQueue {
    /// Create a queue whose sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let next = random_kind(&mut rng);
        Self { next, rng, seed }
    }

    /// Create a queue whose first piece is `first`; later draws follow `seed`
    pub fn starting_with(first: ShapeKind, seed: u64) -> Self {
        Self {
            next: first,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// The upcoming kind, stable until [`BlockQueue::take_next`] is called
    pub fn peek_next(&self) -> ShapeKind {
        self.next
    }

    /// Hand out the upcoming kind and draw a different one to replace it
    pub fn take_next(&mut self) -> ShapeKind {
        let taken = self.next;
        let mut candidate = random_kind(&mut self.rng);
        while candidate == taken {
            candidate = random_kind(&mut self.rng);
        }
        self.next = candidate;
        taken
    }

    /// Seed this queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for BlockQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

fn random_kind(rng: &mut impl Rng) -> ShapeKind {
    ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_queue_deterministic() {
        let mut q1 = BlockQueue::new(12345);
        let mut q2 = BlockQueue::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(q1.take_next(), q2.take_next());
        }
    }

    #[test]
    fn test_peek_matches_take() {
        let mut queue = BlockQueue::new(7);
        for _ in 0..20 {
            let peeked = queue.peek_next();
            assert_eq!(peeked, queue.peek_next());
            assert_eq!(queue.take_next(), peeked);
        }
    }

    #[test]
    fn test_no_immediate_repeat() {
        let mut queue = BlockQueue::new(99);
        let mut prev = queue.take_next();
        for _ in 0..1000 {
            let next = queue.take_next();
            assert_ne!(prev, next);
            prev = next;
        }
    }

    #[test]
    fn test_every_kind_appears() {
        let mut queue = BlockQueue::new(3);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[(queue.take_next().id() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_starting_with_forces_first_piece() {
        let mut queue = BlockQueue::starting_with(ShapeKind::O, 5);
        assert_eq!(queue.peek_next(), ShapeKind::O);
        assert_eq!(queue.take_next(), ShapeKind::O);
        assert_ne!(queue.peek_next(), ShapeKind::O);
    }

    proptest! {
        #[test]
        fn prop_no_repeat_for_any_seed(seed in any::<u64>(), n in 2usize..400) {
            let mut queue = BlockQueue::new(seed);
            let mut prev = queue.take_next();
            for _ in 1..n {
                let next = queue.take_next();
                prop_assert_ne!(prev, next);
                prev = next;
            }
        }
    }
}

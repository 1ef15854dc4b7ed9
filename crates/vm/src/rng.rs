//! Seedable random source for the `?` instruction.

use std::time::{SystemTime, UNIX_EPOCH};

use trefunge_common::{Direction, ALL_DIRECTIONS};

/// SplitMix64 generator. Fixing the seed fixes every `?` outcome.
#[derive(Debug, Clone)]
pub struct DirectionRng {
    state: u64,
}

impl DirectionRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the system clock.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ u64::from(std::process::id()).rotate_left(32))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// One of the six directions, uniformly.
    pub fn next_direction(&mut self) -> Direction {
        ALL_DIRECTIONS[(self.next_u64() % ALL_DIRECTIONS.len() as u64) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = DirectionRng::new(42);
        let mut b = DirectionRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_direction(), b.next_direction());
        }
    }

    #[test]
    fn all_directions_reachable() {
        let mut rng = DirectionRng::new(7);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let dir = rng.next_direction();
            let idx = ALL_DIRECTIONS.iter().position(|&d| d == dir).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn roughly_uniform() {
        let mut rng = DirectionRng::new(0xA55E_2026);
        let mut counts = [0u32; 6];
        for _ in 0..6000 {
            let dir = rng.next_direction();
            counts[ALL_DIRECTIONS.iter().position(|&d| d == dir).unwrap()] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "{counts:?}");
        }
    }
}

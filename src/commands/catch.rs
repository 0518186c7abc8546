//! Catch Policy
//!
//! Decides whether a thrown ball catches a pokemon.

use rand::Rng;

/// Base experience at which the catch chance drops to one half
pub const CATCH_SCALE: f64 = 100.0;

/// Probability of catching a pokemon with the given base experience.
///
/// Falls from 1.0 at zero experience towards 0 as experience grows.
pub fn catch_probability(base_experience: u32) -> f64 {
    CATCH_SCALE / (CATCH_SCALE + f64::from(base_experience))
}

/// Rolls one catch attempt.
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    rng.gen_bool(catch_probability(base_experience))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probability_bounds() {
        assert_eq!(catch_probability(0), 1.0);
        assert_eq!(catch_probability(100), 0.5);
        assert!(catch_probability(u32::MAX) > 0.0);
        assert!(catch_probability(u32::MAX) < 0.001);
    }

    #[test]
    fn test_probability_decreases_with_experience() {
        assert!(catch_probability(64) > catch_probability(112));
        assert!(catch_probability(112) > catch_probability(340));
    }

    #[test]
    fn test_zero_experience_always_caught() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!((0..100).all(|_| attempt_catch(&mut rng, 0)));
    }

    #[test]
    fn test_catch_rate_tracks_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        let caught = (0..10_000).filter(|_| attempt_catch(&mut rng, 100)).count();
        assert!((4_500..5_500).contains(&caught), "caught {} of 10000", caught);
    }
}

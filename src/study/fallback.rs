//! Cosmetic messages shown instead of real errors

use rand::seq::SliceRandom;

/// The fixed pool of fallback messages
pub const FALLBACK_MESSAGES: [&str; 4] = [
    "Oops! Something went wrong. Please try again.",
    "The study assistant is taking a short break. Try again in a moment.",
    "We couldn't get a response right now. Please retry.",
    "Hmm, nothing came back this time. Give it another go!",
];

/// Chooses which fallback message to show
pub trait FallbackPolicy: Send + Sync {
    fn pick(&self) -> &'static str;
}

/// Picks a message at random
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFallback;

impl FallbackPolicy for RandomFallback {
    fn pick(&self) -> &'static str {
        FALLBACK_MESSAGES.choose(&mut rand::thread_rng()).copied().unwrap_or(FALLBACK_MESSAGES[0])
    }
}

/// Always picks the same message (index wraps around the pool)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFallback(pub usize);

impl FallbackPolicy for FixedFallback {
    fn pick(&self) -> &'static str {
        FALLBACK_MESSAGES[self.0 % FALLBACK_MESSAGES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_picks_from_pool() {
        for _ in 0..50 {
            assert!(FALLBACK_MESSAGES.contains(&RandomFallback.pick()));
        }
    }

    #[test]
    fn fixed_is_deterministic() {
        assert_eq!(FixedFallback(2).pick(), FALLBACK_MESSAGES[2]);
        assert_eq!(FixedFallback(5).pick(), FALLBACK_MESSAGES[1]);
    }
}

//! Bounded resampling for deck draws

use crate::deck::DeckError;
use tracing::debug;

/// How many times a caller is willing to redraw after a duplicate-name draw
///
/// Only [`DeckError::DuplicateNames`] is retried; every other error means the
/// catalog cannot satisfy the request and is returned at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    /// A policy making at most `max_attempts` draws (at least one)
    pub fn new(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
        }
    }

    /// A single draw, no retries
    pub fn once() -> Self {
        RetryPolicy::new(1)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run `draw` until it succeeds, fails for a reason other than duplicate
    /// names, or the attempts run out. `draw` receives the 1-based attempt.
    pub fn run<T, F>(&self, mut draw: F) -> Result<T, DeckError>
    where
        F: FnMut(u32) -> Result<T, DeckError>,
    {
        let mut attempt = 1;
        loop {
            match draw(attempt) {
                Err(DeckError::DuplicateNames) if attempt < self.max_attempts => {
                    debug!(attempt, max = self.max_attempts, "duplicate names, redrawing");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::once()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least_one_attempt() {
        assert_eq!(RetryPolicy::new(0).max_attempts(), 1);
        assert_eq!(RetryPolicy::default(), RetryPolicy::once());
    }

    #[test]
    fn test_retries_duplicates_until_success() {
        let mut calls = 0;
        let result = RetryPolicy::new(5).run(|attempt| {
            calls += 1;
            if attempt < 3 {
                Err(DeckError::DuplicateNames)
            } else {
                Ok(attempt)
            }
        });
        assert_eq!(result, Ok(3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut calls = 0;
        let result: Result<(), _> = RetryPolicy::new(4).run(|_| {
            calls += 1;
            Err(DeckError::DuplicateNames)
        });
        assert_eq!(result, Err(DeckError::DuplicateNames));
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_other_errors_not_retried() {
        let mut calls = 0;
        let result: Result<(), _> = RetryPolicy::new(10).run(|_| {
            calls += 1;
            Err(DeckError::InsufficientCards { available: 2 })
        });
        assert_eq!(result, Err(DeckError::InsufficientCards { available: 2 }));
        assert_eq!(calls, 1);
    }
}

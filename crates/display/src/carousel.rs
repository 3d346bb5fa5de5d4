//! The carousel selection state machine.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use symora_core::{DomainError, DomainResult};

/// Wall-clock cadence between automatic slide advances.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Selection state for the featured-product carousel.
///
/// Holds an index in `[0, len)` that advances by one position, modulo the
/// sequence length, on every tick. The driver is best-effort cosmetic
/// state: a missed tick is not an error.
///
/// `stop()` models view teardown. It is idempotent, and once stopped the
/// index can never change again; the owning view additionally clears the
/// repeating timer so no late tick fires at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    stopped: bool,
}

impl Carousel {
    /// Create a driver over a sequence of `len` slides.
    ///
    /// `len` must be at least 1. A single-slide carousel is valid:
    /// advancing modulo 1 is a defined no-op.
    pub fn new(len: usize) -> DomainResult<Self> {
        if len == 0 {
            return Err(DomainError::validation(
                "carousel requires at least one slide",
            ));
        }
        Ok(Self {
            len,
            index: 0,
            stopped: false,
        })
    }

    /// The currently-selected slide.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance one position, wrapping at the end. Returns the new index.
    ///
    /// A no-op after [`Carousel::stop`].
    pub fn advance(&mut self) -> usize {
        if !self.stopped {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Stop the driver; further advances are no-ops. Idempotent.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_zero_length() {
        let err = Carousel::new(0).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected validation error for zero-length carousel"),
        }
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(Carousel::new(4).unwrap().index(), 0);
    }

    #[test]
    fn advance_wraps_at_length() {
        let mut carousel = Carousel::new(4).unwrap();
        assert_eq!(carousel.advance(), 1);
        assert_eq!(carousel.advance(), 2);
        assert_eq!(carousel.advance(), 3);
        assert_eq!(carousel.advance(), 0);
        assert_eq!(carousel.advance(), 1);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.index(), 0);
        for _ in 0..10 {
            assert_eq!(carousel.advance(), 0);
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn no_index_change_after_stop() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.advance();
        carousel.advance();
        let frozen = carousel.index();

        carousel.stop();
        for _ in 0..10 {
            carousel.advance();
        }
        assert_eq!(carousel.index(), frozen);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut carousel = Carousel::new(2).unwrap();
        carousel.stop();
        carousel.stop();
        assert!(carousel.is_stopped());
        assert_eq!(carousel.advance(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after k ticks over N slides, the index is k mod N.
        #[test]
        fn index_after_k_ticks_is_k_mod_n(len in 1usize..32, ticks in 0usize..200) {
            let mut carousel = Carousel::new(len).unwrap();
            for _ in 0..ticks {
                carousel.advance();
            }
            prop_assert_eq!(carousel.index(), ticks % len);
        }

        /// Property: the index stays in range whatever happens.
        #[test]
        fn index_stays_in_range(
            len in 1usize..32,
            ops in prop::collection::vec(prop::bool::ANY, 0..64)
        ) {
            let mut carousel = Carousel::new(len).unwrap();
            for stop in ops {
                if stop {
                    carousel.stop();
                } else {
                    carousel.advance();
                }
                prop_assert!(carousel.index() < len);
            }
        }
    }
}

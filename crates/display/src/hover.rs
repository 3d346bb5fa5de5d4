//! The per-card hover state machine.

use serde::{Deserialize, Serialize};

/// Hover state for one product card instance.
///
/// States are {resting, hovered}; pointer-enter and pointer-leave are the
/// only transitions, both self-looping when re-triggered. The displayed
/// image index is derived: 1 while hovered if a secondary image exists,
/// otherwise always 0. A card with a single image never switches away from
/// its resting image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    image_count: usize,
    hovered: bool,
}

impl HoverState {
    /// A resting card over `image_count` images.
    ///
    /// `image_count == 0` is tolerated (treated as "no secondary image");
    /// the catalog invariant makes it unreachable in practice.
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            hovered: false,
        }
    }

    /// Pointer entered the card. Idempotent.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the card. Idempotent; unconditionally back to resting.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The image index the card should display right now.
    pub fn image_index(&self) -> usize {
        if self.hovered && self.image_count >= 2 { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_resting_on_primary_image() {
        let state = HoverState::new(2);
        assert!(!state.is_hovered());
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn enter_switches_to_secondary_when_present() {
        let mut state = HoverState::new(2);
        state.pointer_enter();
        assert!(state.is_hovered());
        assert_eq!(state.image_index(), 1);
    }

    #[test]
    fn enter_never_switches_single_image_card() {
        let mut state = HoverState::new(1);
        state.pointer_enter();
        assert!(state.is_hovered());
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn leave_resets_to_primary() {
        let mut state = HoverState::new(3);
        state.pointer_enter();
        state.pointer_leave();
        assert!(!state.is_hovered());
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn repeated_enter_and_leave_are_no_ops() {
        let mut state = HoverState::new(2);
        state.pointer_enter();
        let hovered = state;
        state.pointer_enter();
        assert_eq!(state, hovered);

        state.pointer_leave();
        let resting = state;
        state.pointer_leave();
        assert_eq!(state, resting);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: under any enter/leave sequence, the index is 1 exactly
        /// when hovered with a secondary image present, else 0.
        #[test]
        fn index_tracks_hover_and_image_count(
            image_count in 0usize..5,
            enters in prop::collection::vec(prop::bool::ANY, 0..32)
        ) {
            let mut state = HoverState::new(image_count);
            for enter in enters {
                if enter {
                    state.pointer_enter();
                } else {
                    state.pointer_leave();
                }
                let expected = if state.is_hovered() && image_count >= 2 { 1 } else { 0 };
                prop_assert_eq!(state.image_index(), expected);
            }
        }
    }
}

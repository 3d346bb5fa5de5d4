//! `symora-display`
//!
//! **Responsibility:** the product display state machine.
//!
//! Two small, independent pieces of state-driven logic live here, kept free
//! of any UI-framework dependency so they test natively:
//! - [`Carousel`] — advances a featured-product index on a fixed cadence.
//! - [`HoverState`] — toggles a card between its resting and hover image.
//!
//! The frontend owns the timers and event listeners; this crate owns what
//! they do to state.

pub mod carousel;
pub mod hover;

pub use carousel::{Carousel, SLIDE_INTERVAL};
pub use hover::HoverState;

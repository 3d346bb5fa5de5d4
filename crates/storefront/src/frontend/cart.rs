//! External cart collaborator surface.
//!
//! Cart and checkout logic live outside this storefront. The header only
//! needs two things from the collaborator: the item count to display, and a
//! way to toggle the cart panel.

use leptos::*;

/// Handle to the cart collaborator, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct CartContext {
    item_count: RwSignal<u32>,
    open: RwSignal<bool>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            item_count: create_rw_signal(0),
            open: create_rw_signal(false),
        }
    }

    /// Reactive item count for the header badge.
    pub fn item_count(&self) -> RwSignal<u32> {
        self.item_count
    }

    pub fn is_open(&self) -> RwSignal<bool> {
        self.open
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

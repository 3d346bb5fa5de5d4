//! `symora-storefront`
//!
//! **Responsibility:** the client-side storefront shell.
//!
//! This crate provides:
//! - Route definitions shared between views and tests
//! - The Leptos (CSR) frontend: header, landing page, product card and
//!   product detail views
//!
//! The storefront is a **thin shell** around the read-only catalog: no
//! persistence, no network calls, no cart logic (the cart is an external
//! collaborator whose item count is merely displayed).

pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

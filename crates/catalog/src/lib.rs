//! `symora-catalog`
//!
//! **Responsibility:** the read-only product catalog.
//!
//! This crate provides:
//! - The `Product` record (display text, price, imagery, benefit tags)
//! - The ordered `Catalog` with id lookup and the featured subset
//! - The compiled-in SYMORA catalog data
//!
//! Types here are shared with the WASM frontend and must not depend on
//! anything backend-only.

pub mod catalog;
pub mod data;
pub mod product;

pub use catalog::{Catalog, FEATURED_COUNT};
pub use data::builtin;
pub use product::{Product, ProductImages, DISPLAYED_BENEFITS};

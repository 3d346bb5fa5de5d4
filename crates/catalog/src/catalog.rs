//! The ordered, read-only catalog.

use serde::{Deserialize, Serialize};

use symora_core::ProductId;

use crate::product::Product;

/// How many catalog entries the landing page features.
pub const FEATURED_COUNT: usize = 4;

/// An ordered sequence of products.
///
/// The catalog is compiled in and read-only: it may be shared freely across
/// any number of views without locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look a product up by its stable id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// The rotating subset shown on the landing view: the first
    /// [`FEATURED_COUNT`] entries, fewer if the catalog is shorter.
    pub fn featured(&self) -> &[Product] {
        let count = self.products.len().min(FEATURED_COUNT);
        &self.products[..count]
    }
}

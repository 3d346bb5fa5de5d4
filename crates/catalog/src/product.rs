//! The product record and its imagery invariant.

use serde::{Deserialize, Serialize};

use symora_core::{DomainError, DomainResult, Money, ProductId};

/// How many benefit tags a card ever shows.
pub const DISPLAYED_BENEFITS: usize = 2;

/// Ordered image references for one product.
///
/// Invariant: never empty. Index 0 is the resting image; index 1 (if
/// present) is the hover image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductImages(Vec<String>);

impl ProductImages {
    pub fn new(images: Vec<String>) -> DomainResult<Self> {
        if images.is_empty() {
            return Err(DomainError::invariant("product images must not be empty"));
        }
        if images.iter().any(|i| i.trim().is_empty()) {
            return Err(DomainError::validation("image reference must not be blank"));
        }
        Ok(Self(images))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The resting image (index 0).
    pub fn primary(&self) -> &str {
        self.image_at(0)
    }

    /// The hover image, if the product has one.
    pub fn hover(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// Image at `index`, falling back to the resting image when the index
    /// is out of range. Display code never fails on a bad index.
    pub fn image_at(&self, index: usize) -> &str {
        self.0
            .get(index)
            .or_else(|| self.0.first())
            .map_or("", String::as_str)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    images: ProductImages,
    benefits: Vec<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        images: ProductImages,
        benefits: Vec<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be blank"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation(
                "product description must not be blank",
            ));
        }
        Ok(Self {
            id,
            name,
            description,
            price,
            images,
            benefits,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn images(&self) -> &ProductImages {
        &self.images
    }

    /// All benefit tags, in catalog order.
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    /// The benefit tags a card actually renders (at most the first two).
    pub fn display_benefits(&self) -> &[String] {
        let shown = self.benefits.len().min(DISPLAYED_BENEFITS);
        &self.benefits[..shown]
    }
}

//! The compiled-in SYMORA catalog.
//!
//! Product ids are fixed so identity is stable across renders and builds.

use uuid::Uuid;

use symora_core::{DomainResult, Money, ProductId};

use crate::catalog::Catalog;
use crate::product::{Product, ProductImages};

fn product(
    id: u128,
    name: &str,
    description: &str,
    price_cents: u64,
    images: &[&str],
    benefits: &[&str],
) -> DomainResult<Product> {
    Product::new(
        ProductId::from_uuid(Uuid::from_u128(id)),
        name,
        description,
        Money::eur(price_cents),
        ProductImages::new(images.iter().map(|s| s.to_string()).collect())?,
        benefits.iter().map(|s| s.to_string()).collect(),
    )
}

/// Build the builtin catalog.
///
/// The data is compiled in; a validation failure here is a programming
/// error surfaced to the caller rather than a panic.
pub fn builtin() -> DomainResult<Catalog> {
    let products = vec![
        product(
            0x01,
            "SYMORA Posture Corrector",
            "Swiss-engineered biomechanical support that restores natural \
             spinal alignment within minutes of wear.",
            29_99,
            &[
                "/images/posture-corrector-front.png",
                "/images/posture-corrector-worn.png",
            ],
            &["Swiss Precision", "Instant Alignment", "All-Day Comfort"],
        )?,
        product(
            0x02,
            "SYMORA Align Pro",
            "The flagship posture trainer with adaptive tension bands, \
             handcrafted for discerning individuals.",
            89_99,
            &["/images/align-pro-front.png", "/images/align-pro-detail.png"],
            &["Adaptive Tension", "Handcrafted", "Celebrity Endorsed"],
        )?,
        product(
            0x03,
            "SYMORA Lumbar Cushion",
            "Memory-contour lumbar support finished in Italian vegan \
             leather for the executive chair.",
            59_99,
            &[
                "/images/lumbar-cushion-front.png",
                "/images/lumbar-cushion-side.png",
            ],
            &["Memory Contour", "Italian Finish"],
        )?,
        product(
            0x04,
            "SYMORA Neck Release",
            "Cervical traction wedge that melts away desk-day tension in \
             ten minutes.",
            44_99,
            &["/images/neck-release-front.png"],
            &["Cervical Traction", "Ten-Minute Ritual"],
        )?,
        product(
            0x05,
            "SYMORA Stance Insoles",
            "Pressure-mapped insoles that rebalance your stance from the \
             ground up.",
            39_99,
            &[
                "/images/stance-insoles-pair.png",
                "/images/stance-insoles-profile.png",
            ],
            &["Pressure Mapped", "Ground-Up Balance"],
        )?,
        product(
            0x06,
            "SYMORA Travel Wrap",
            "Packable posture wrap for flights and long commutes, woven \
             from temperature-regulating merino.",
            34_99,
            &["/images/travel-wrap-front.png", "/images/travel-wrap-rolled.png"],
            &["Packable", "Merino Wool"],
        )?,
    ];

    tracing::debug!(products = products.len(), "builtin catalog constructed");
    Ok(Catalog::new(products))
}

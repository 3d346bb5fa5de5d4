//! End-to-end display behavior over a minimal catalog.

use symora_catalog::{builtin, Catalog, Product, ProductImages};
use symora_core::{Money, ProductId};
use symora_display::{Carousel, HoverState};
use symora_storefront::routes::{parse_product_path, product_path};

fn test_product(name: &str, images: &[&str]) -> Product {
    Product::new(
        ProductId::new(),
        name,
        "Test description.",
        Money::eur(1999),
        ProductImages::new(images.iter().map(|s| s.to_string()).collect()).unwrap(),
        vec![],
    )
    .unwrap()
}

/// Catalog `[A(images=[a1]), B(images=[b1,b2])]`: hovering B shows its
/// secondary image and leaving restores the primary; hovering A (single
/// image) never switches away from its resting image.
#[test]
fn hover_flow_over_mixed_catalog() {
    let a = test_product("A", &["a1.png"]);
    let b = test_product("B", &["b1.png", "b2.png"]);
    let catalog = Catalog::new(vec![a.clone(), b.clone()]);

    let mut hover_b = HoverState::new(b.images().len());
    hover_b.pointer_enter();
    assert_eq!(b.images().image_at(hover_b.image_index()), "b2.png");
    hover_b.pointer_leave();
    assert_eq!(b.images().image_at(hover_b.image_index()), "b1.png");

    let mut hover_a = HoverState::new(a.images().len());
    hover_a.pointer_enter();
    assert_eq!(a.images().image_at(hover_a.image_index()), "a1.png");

    // Activation hands over the exact record, hover state notwithstanding:
    // the navigation callback pushes the product route, and resolving that
    // route lands back on the same product.
    let path = product_path(b.id());
    let id = parse_product_path(&path).unwrap();
    assert_eq!(catalog.find(id), Some(&b));
}

#[test]
fn featured_carousel_cycles_in_catalog_order() {
    let catalog = builtin().unwrap();
    let featured = catalog.featured();
    let mut carousel = Carousel::new(featured.len()).unwrap();

    let mut shown = vec![featured[carousel.index()].name().to_string()];
    for _ in 1..featured.len() {
        shown.push(featured[carousel.advance()].name().to_string());
    }
    let names: Vec<_> = featured.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(shown, names);

    // A full cycle wraps back to the first slide.
    assert_eq!(carousel.advance(), 0);
}

/// After teardown (`stop()`), simulated ticks mutate nothing.
#[test]
fn no_slide_changes_after_view_disposal() {
    let catalog = builtin().unwrap();
    let mut carousel = Carousel::new(catalog.featured().len()).unwrap();
    carousel.advance();
    let last = carousel.index();

    carousel.stop();
    for _ in 0..24 {
        carousel.advance();
    }
    assert_eq!(carousel.index(), last);
}

//! Route paths shared between the router, the views, and tests.

use symora_core::ProductId;

/// Landing page.
pub const HOME: &str = "/";

/// Product detail page (router pattern).
pub const PRODUCT: &str = "/product/:id";

const PRODUCT_PREFIX: &str = "/product/";

/// Concrete path for one product's detail page.
pub fn product_path(id: ProductId) -> String {
    format!("{PRODUCT_PREFIX}{id}")
}

/// Extract the product id from a concrete product path, if it is one.
pub fn parse_product_path(path: &str) -> Option<ProductId> {
    path.strip_prefix(PRODUCT_PREFIX)?.parse().ok()
}

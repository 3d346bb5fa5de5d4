//! View components.

pub mod header;
pub mod home;
pub mod product_card;
pub mod product_page;

pub use header::Header;
pub use home::HomePage;
pub use product_card::ProductCard;
pub use product_page::ProductPage;

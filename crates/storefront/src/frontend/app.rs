//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use symora_catalog::{builtin, Catalog, Product};

use crate::frontend::cart::CartContext;
use crate::frontend::components::{Header, HomePage, ProductPage};
use crate::routes;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let catalog = store_value(builtin().unwrap_or_else(|err| {
        tracing::warn!(%err, "builtin catalog failed validation; rendering empty storefront");
        Catalog::default()
    }));
    provide_context(catalog);
    provide_context(CartContext::new());

    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route
                        path=routes::HOME
                        view=move || {
                            let navigate = use_navigate();
                            let on_view = Callback::new(move |product: Product| {
                                navigate(&routes::product_path(product.id()), Default::default());
                            });
                            view! { <HomePage on_view=on_view/> }
                        }
                    />
                    <Route path=routes::PRODUCT view=ProductPage/>
                </Routes>
            </main>
        </Router>
    }
}

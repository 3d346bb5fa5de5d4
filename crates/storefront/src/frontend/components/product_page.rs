//! Product detail page.

use leptos::*;
use leptos_router::{use_params_map, A};

use symora_catalog::Catalog;
use symora_core::ProductId;

use crate::routes;

/// Detail view for `/product/:id`.
///
/// Unknown or malformed ids render a not-found message; this is defined
/// behavior, not an error path.
#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let params = use_params_map();

    let product = create_memo(move |_| {
        params
            .with(|p| p.get("id").cloned().unwrap_or_default())
            .parse::<ProductId>()
            .ok()
            .and_then(|id| catalog.with_value(|c| c.find(id).cloned()))
    });

    view! {
        <div class="product-page">
            <A href=routes::HOME class="back-link">
                "Back to the collection"
            </A>

            {move || match product.get() {
                Some(product) => {
                    view! {
                        <article class="product-detail">
                            <div class="detail-media">
                                <img
                                    src=product.images().primary().to_string()
                                    alt=product.name().to_string()
                                />
                            </div>
                            <div class="detail-body">
                                <h1>{product.name().to_string()}</h1>
                                <p class="detail-price">{product.price().to_string()}</p>
                                <p class="detail-description">
                                    {product.description().to_string()}
                                </p>
                                <ul class="detail-benefits">
                                    {product
                                        .benefits()
                                        .iter()
                                        .map(|benefit| {
                                            view! { <li>{benefit.clone()}</li> }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </article>
                    }
                        .into_view()
                }
                None => {
                    view! {
                        <p class="not-found">
                            "This piece is no longer part of the collection."
                        </p>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

//! Product card with hover image switching.

use leptos::*;

use symora_catalog::Product;
use symora_display::HoverState;

/// One product card.
///
/// Owns a [`HoverState`] scoped to this instance: pointer enter swaps to the
/// secondary image when one exists, pointer leave always returns to the
/// resting image. Clicking the card hands the full product record to the
/// navigation callback.
#[component]
pub fn ProductCard(product: Product, #[prop(into)] on_view: Callback<Product>) -> impl IntoView {
    let hover = create_rw_signal(HoverState::new(product.images().len()));

    let name = product.name().to_string();
    let description = product.description().to_string();
    let price = product.price().to_string();
    let benefits = product.display_benefits().to_vec();
    let product = store_value(product);

    let image_src = move || {
        let index = hover.with(|h| h.image_index());
        product.with_value(|p| p.images().image_at(index).to_string())
    };

    view! {
        <div
            class="product-card"
            class:hovered=move || hover.with(|h| h.is_hovered())
            on:mouseenter=move |_| hover.update(|h| h.pointer_enter())
            on:mouseleave=move |_| hover.update(|h| h.pointer_leave())
            on:click=move |_| on_view.call(product.get_value())
        >
            <div class="card-media">
                <img src=image_src alt=name.clone()/>
                <span class="card-price-tag">{price.clone()}</span>
            </div>

            <div class="card-body">
                <h3>{name.clone()}</h3>
                <p class="card-description">{description}</p>
                <div class="benefit-pills">
                    {benefits
                        .into_iter()
                        .map(|benefit| view! { <span class="benefit-pill">{benefit}</span> })
                        .collect_view()}
                </div>
                <p class="card-price">
                    <strong>{price}</strong>
                    <span class="delivery-note">"Complimentary delivery"</span>
                </p>
            </div>
        </div>
    }
}

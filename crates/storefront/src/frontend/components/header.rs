//! Sticky header with navigation, cart badge, and mobile menu.

use leptos::*;
use leptos_router::A;

use crate::frontend::cart::CartContext;
use crate::routes;

const NAVIGATION: [(&str, &str); 4] = [
    ("Home", routes::HOME),
    ("Collection", "/#collection"),
    ("Heritage", "/#heritage"),
    ("Concierge", "/#concierge"),
];

/// Site header.
///
/// The cart itself is an external collaborator; the header only renders its
/// item count and forwards the toggle.
#[component]
pub fn Header() -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let item_count = cart.item_count();
    let cart_open = cart.is_open();
    let mobile_menu_open = create_rw_signal(false);

    view! {
        <header class="site-header" class:cart-open=move || cart_open.get()>
            <A href=routes::HOME class="brand">
                <span class="brand-mark">"S"</span>
                <span class="brand-name">"SYMORA"</span>
            </A>

            <nav class="nav-desktop">
                {NAVIGATION
                    .iter()
                    .map(|(name, href)| {
                        view! { <a href=*href class="nav-link">{*name}</a> }
                    })
                    .collect_view()}
            </nav>

            <div class="header-actions">
                <button class="cart-button" on:click=move |_| cart.toggle()>
                    {move || if cart_open.get() { "Close Cart" } else { "Cart" }}
                    <Show when=move || item_count.get() > 0>
                        <span class="cart-badge">{move || item_count.get()}</span>
                    </Show>
                </button>

                <button
                    class="menu-toggle"
                    on:click=move |_| mobile_menu_open.update(|open| *open = !*open)
                >
                    {move || if mobile_menu_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            <Show when=move || mobile_menu_open.get()>
                <nav class="nav-mobile">
                    {NAVIGATION
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="nav-link"
                                    on:click=move |_| mobile_menu_open.set(false)
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

//! Landing page: hero, features, featured collection, closing call to action.

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::*;

use symora_catalog::{Catalog, Product};
use symora_display::{Carousel, SLIDE_INTERVAL};

use crate::frontend::components::ProductCard;

const FEATURES: [(&str, &str); 4] = [
    (
        "Luxury Craftsmanship",
        "Handcrafted with Swiss precision and Italian finesse",
    ),
    (
        "Exclusive Technology",
        "Patented biomechanical engineering for elite performance",
    ),
    (
        "Instant Transformation",
        "Immediate posture enhancement and confidence from first wear",
    ),
    (
        "Celebrity Endorsed",
        "Trusted by A-list celebrities and Fortune 500 executives",
    ),
];

/// Landing page.
///
/// Owns the featured-product carousel: the repeating interval is an explicit
/// handle cleared on unmount, and the driver is stopped with it, so no tick
/// can mutate state after teardown. The decorative parallax offset is
/// view-local for the same reason; nothing here outlives the component.
#[component]
pub fn HomePage(#[prop(into)] on_view: Callback<Product>) -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let featured = store_value(catalog.with_value(|c| c.featured().to_vec()));
    let slide_count = featured.with_value(Vec::len);

    let carousel = create_rw_signal(Carousel::new(slide_count).ok());
    if carousel.with_untracked(Option::is_some) {
        match set_interval_with_handle(
            move || {
                carousel.update(|c| {
                    if let Some(c) = c.as_mut() {
                        c.advance();
                    }
                });
            },
            SLIDE_INTERVAL,
        ) {
            Ok(handle) => on_cleanup(move || {
                handle.clear();
                let _ = carousel.try_update(|c| {
                    if let Some(c) = c.as_mut() {
                        c.stop();
                    }
                });
            }),
            Err(err) => tracing::warn!(?err, "could not start slide interval"),
        }
    }
    let active_slide = move || carousel.with(|c| c.as_ref().map_or(0, Carousel::index));
    let active_product = move |getter: fn(&Product) -> String| {
        featured.with_value(|f| f.get(active_slide()).map(getter).unwrap_or_default())
    };

    // Decorative parallax offset, scoped to this view's mounted lifetime.
    let (scroll_y, set_scroll_y) = create_signal(0.0f64);
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || scroll_listener.remove());

    let view_first = move |_| {
        if let Some(first) = featured.with_value(|f| f.first().cloned()) {
            on_view.call(first);
        }
    };

    view! {
        <div class="home">
            <section class="hero">
                <div
                    class="hero-backdrop"
                    style:transform=move || format!("translateY({}px)", scroll_y.get() * 0.1)
                ></div>

                <div class="hero-copy">
                    <p class="hero-eyebrow">"Exclusively crafted for the elite"</p>
                    <h1 class="hero-title">
                        <span>"Perfect"</span>
                        <span class="accent">"Posture,"</span>
                        <span>"Perfect Life"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "Experience the pinnacle of postural excellence with our \
                         Swiss-engineered wellness technology, designed for \
                         discerning individuals."
                    </p>
                    <button class="cta" on:click=view_first>
                        "Experience Luxury"
                    </button>

                    <div class="trust-indicators">
                        <div>
                            <strong>"50K+"</strong>
                            <span>"Elite Members"</span>
                        </div>
                        <div>
                            <strong>"99.8%"</strong>
                            <span>"Satisfaction"</span>
                        </div>
                        <div>
                            <strong>"24/7"</strong>
                            <span>"Concierge"</span>
                        </div>
                    </div>
                </div>

                <div class="hero-showcase">
                    <img
                        class="hero-slide"
                        src=move || active_product(|p| p.images().primary().to_string())
                        alt=move || active_product(|p| p.name().to_string())
                    />
                    <div class="slide-indicators">
                        {(0..slide_count)
                            .map(|slide| {
                                view! {
                                    <span
                                        class="slide-dot"
                                        class:active=move || active_slide() == slide
                                    ></span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="heritage" class="features">
                <h2>"Engineered for Perfection"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="feature-tile">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="collection" class="collection">
                <h2>"Luxury Wellness"</h2>
                <p>"Discover our handpicked selection of premium wellness solutions"</p>
                <div class="product-grid">
                    {featured.with_value(|f| {
                        f.iter()
                            .map(|product| {
                                view! {
                                    <ProductCard product=product.clone() on_view=on_view/>
                                }
                            })
                            .collect_view()
                    })}
                </div>
            </section>

            <section id="concierge" class="closing-cta">
                <h2>"Ready to Experience Perfection?"</h2>
                <p>
                    "Join an exclusive community of individuals who demand nothing \
                     but the finest in wellness technology."
                </p>
                <button class="cta" on:click=view_first>
                    "Begin Your Journey"
                </button>
            </section>
        </div>
    }
}

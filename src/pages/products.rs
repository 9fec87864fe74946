//! Product catalogue page.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;

/// Catalogue page — fetches the product list on mount and renders a grid.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products());

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Shop supplements"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products.get().map(|list| match list {
                        Some(list) if !list.is_empty() => view! {
                            <div class="products-page__grid">
                                {list
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        _ => view! {
                            <p class="products-page__empty">
                                "The catalogue is unavailable right now. Please try again shortly."
                            </p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

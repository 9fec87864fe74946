//! Product card for catalogue and landing-page grids.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::cart::CartContext;
use crate::util::format::format_price;

/// Catalogue card with price, discount, benefits, and add-to-cart.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<CartContext>();

    let savings = savings_label(product.price, product.original_price);
    let in_stock = product.in_stock;

    let add_product = product.clone();
    let on_add = move |_| {
        cart.add_item(add_product.clone());
        cart.open_cart();
    };

    view! {
        <article class="product-card">
            <img class="product-card__image" src=product.image.clone() alt=product.name.clone()/>
            <h3 class="product-card__name">{product.name.clone()}</h3>
            <ul class="product-card__benefits">
                {product
                    .benefits
                    .iter()
                    .map(|benefit| view! { <li>{benefit.clone()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="product-card__pricing">
                <span class="product-card__price">{format_price(product.price)}</span>
                {product.original_price.map(|original| view! {
                    <s class="product-card__original">{format_price(original)}</s>
                })}
                {savings.map(|label| view! { <span class="product-card__savings">{label}</span> })}
            </div>
            <button class="btn btn--primary" on:click=on_add disabled=!in_stock>
                {if in_stock { "Add to cart" } else { "Out of stock" }}
            </button>
        </article>
    }
}

/// Discount label when the original price actually exceeds the sale price.
fn savings_label(price: f64, original_price: Option<f64>) -> Option<String> {
    original_price
        .filter(|original| *original > price)
        .map(|original| format!("Save {}", format_price(original - price)))
}

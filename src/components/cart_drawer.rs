//! Slide-over cart drawer bound to the cart's visibility flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drawer renders basket contents and forwards every mutation through
//! the cart context's dispatchable actions. Stock policy lives here, at the
//! UI boundary: the quantity stepper refuses to increase out-of-stock lines
//! while the reducer itself stays permissive.

#[cfg(test)]
#[path = "cart_drawer_test.rs"]
mod cart_drawer_test;

use leptos::prelude::*;

use crate::state::cart::{CartContext, CartItem};
use crate::util::format::format_price;

/// Cart drawer with line items, quantity steppers, and the subtotal footer.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = expect_context::<CartContext>();

    let is_open = move || cart.state().get().is_open;
    let is_empty = move || cart.state().get().items.is_empty();
    let subtotal = move || format_price(cart.state().get().total_price);

    let on_close = move |_| cart.close_cart();
    let on_clear = move |_| cart.clear_cart();

    view! {
        <Show when=is_open>
            <div class="cart-backdrop" on:click=on_close></div>
            <aside class="cart-drawer">
                <header class="cart-drawer__header">
                    <h2>"Your cart"</h2>
                    <button class="cart-drawer__close" on:click=on_close title="Close cart">
                        "×"
                    </button>
                </header>

                <Show
                    when=move || !is_empty()
                    fallback=|| view! {
                        <div class="cart-drawer__empty">
                            <p>"Your cart is empty."</p>
                            <a class="btn btn--primary" href="/products">"Browse supplements"</a>
                        </div>
                    }
                >
                    <ul class="cart-drawer__items">
                        {move || {
                            cart.state()
                                .get()
                                .items
                                .into_iter()
                                .map(|item| view! { <CartLine item=item/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <footer class="cart-drawer__footer">
                        <div class="cart-drawer__subtotal">
                            <span>"Subtotal"</span>
                            <span>{subtotal}</span>
                        </div>
                        <a class="btn btn--primary" href="/checkout" on:click=on_close>
                            "Checkout"
                        </a>
                        <button class="btn btn--quiet" on:click=on_clear>
                            "Clear cart"
                        </button>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}

/// One basket line with quantity controls.
#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let cart = expect_context::<CartContext>();

    let id = item.id;
    let quantity = i64::from(item.quantity);
    let can_increase = item.in_stock;

    let on_decrease = move |_| cart.update_quantity(id, quantity - 1);
    let on_increase = move |_| cart.update_quantity(id, quantity + 1);
    let on_remove = move |_| cart.remove_item(id);

    let line = format_price(line_total(&item));

    view! {
        <li class="cart-line">
            <img class="cart-line__image" src=item.image.clone() alt=item.name.clone()/>
            <div class="cart-line__body">
                <span class="cart-line__name">{item.name.clone()}</span>
                <span class="cart-line__benefits">{item.benefits.join(" · ")}</span>
                <span class="cart-line__price">
                    {format_price(item.price)}
                    {item.original_price.map(|original| view! {
                        <s class="cart-line__original">{format_price(original)}</s>
                    })}
                </span>
            </div>
            <div class="cart-line__controls">
                <div class="cart-line__stepper">
                    <button on:click=on_decrease title="Decrease quantity">"−"</button>
                    <span>{item.quantity}</span>
                    <button on:click=on_increase disabled=!can_increase title="Increase quantity">
                        "+"
                    </button>
                </div>
                <span class="cart-line__total">{line}</span>
                <button class="cart-line__remove" on:click=on_remove title="Remove item">
                    "Remove"
                </button>
            </div>
        </li>
    }
}

fn line_total(item: &CartItem) -> f64 {
    item.price * f64::from(item.quantity)
}

//! Checkout page: order summary and confirmation.
//!
//! Reads cart contents without mutating them; the cart is cleared only
//! after the backend accepts the order. Mounted behind `ProtectedRoute`.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;

use crate::net::types::{Order, OrderItem};
use crate::state::cart::{CartContext, CartItem};
use crate::util::format::format_price;

/// Map basket lines to the order request payload.
fn order_lines(items: &[CartItem]) -> Vec<OrderItem> {
    items
        .iter()
        .map(|item| OrderItem {
            product_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        })
        .collect()
}

/// Checkout page — summary, place-order action, and confirmation view.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<CartContext>();

    let placed = RwSignal::new(None::<Order>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let is_empty = move || cart.state().get().items.is_empty();

    let on_place_order = move |_| {
        if busy.get() {
            return;
        }
        let lines = order_lines(&cart.state().get_untracked().items);
        if lines.is_empty() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::place_order(&lines).await {
                Ok(order) => {
                    cart.clear_cart();
                    placed.set(Some(order));
                }
                Err(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lines;
        }
    };

    view! {
        <div class="checkout-page">
            {move || {
                if let Some(order) = placed.get() {
                    view! { <OrderConfirmation order=order/> }.into_any()
                } else if is_empty() {
                    view! {
                        <div class="checkout-page__empty">
                            <h1>"Your cart is empty"</h1>
                            <a class="btn btn--primary" href="/products">"Browse supplements"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="checkout-page__summary">
                            <h1>"Order summary"</h1>
                            <ul class="checkout-page__lines">
                                {cart
                                    .state()
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|item| view! {
                                        <li class="checkout-line">
                                            <span>{item.name.clone()}</span>
                                            <span>{format!("× {}", item.quantity)}</span>
                                            <span>
                                                {format_price(item.price * f64::from(item.quantity))}
                                            </span>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <div class="checkout-page__total">
                                <span>"Total"</span>
                                <span>{format_price(cart.state().get().total_price)}</span>
                            </div>
                            <button
                                class="btn btn--primary"
                                on:click=on_place_order
                                disabled=move || busy.get()
                            >
                                "Place order"
                            </button>
                            <Show when=move || !error.get().is_empty()>
                                <p class="checkout-page__error">{move || error.get()}</p>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Post-purchase confirmation view.
#[component]
fn OrderConfirmation(order: Order) -> impl IntoView {
    view! {
        <div class="checkout-page__confirmation">
            <h1>"Thank you!"</h1>
            <p>"Your order is confirmed."</p>
            <dl class="checkout-page__receipt">
                <dt>"Order number"</dt>
                <dd>{order.id.clone()}</dd>
                <dt>"Total"</dt>
                <dd>{format_price(order.total)}</dd>
                <dt>"Status"</dt>
                <dd>{order.status.clone()}</dd>
            </dl>
            <a class="btn" href="/account">"View your plan"</a>
        </div>
    }
}

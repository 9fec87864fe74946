//! Top navigation chrome with the cart toggle and session links.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::auth::AuthContext;
use crate::state::cart::CartContext;

/// Site-wide header: nav links, account entry, and the cart button.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let cart = expect_context::<CartContext>();

    let badge = move || cart_badge_label(cart.state().get().total_items);
    let show_badge = move || cart.state().get().total_items > 0;
    let logged_in = move || auth.state().get().logged_in;

    let on_cart = move |_| cart.toggle_cart();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            auth.logout().await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <header class="site-header">
            <a class="site-header__logo" href="/">
                "Verdane"
            </a>
            <nav class="site-header__nav">
                <a href="/products">"Shop"</a>
                <a href="/account">"My Plan"</a>
            </nav>
            <div class="site-header__session">
                <Show
                    when=logged_in
                    fallback=|| view! { <a class="site-header__link" href="/login">"Sign in"</a> }
                >
                    <button class="site-header__link" on:click=on_logout>
                        "Sign out"
                    </button>
                </Show>
                <button class="site-header__cart" on:click=on_cart title="Open cart">
                    "Cart"
                    <Show when=show_badge>
                        <span class="site-header__cart-badge">{badge}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}

fn cart_badge_label(count: u32) -> String {
    if count > 99 {
        "99+".to_owned()
    } else {
        count.to_string()
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cart_drawer::CartDrawer;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    account::AccountPage, checkout::CheckoutPage, confirm_email::ConfirmEmailPage, home::HomePage,
    login::LoginPage, products::ProductsPage, reset_password::ResetPasswordPage,
};
use crate::state::auth::AuthContext;
use crate::state::cart::CartContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the cart and auth contexts exactly once for the application's
/// lifetime and provides them to all subtrees, then sets up client-side
/// routing. Pages that require a session are wrapped in `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    let cart = CartContext::new();
    provide_context(auth);
    provide_context(cart);

    // Kick off the session check and the one-time cart hydration read.
    #[cfg(feature = "hydrate")]
    {
        auth.load_session();
        cart.hydrate();
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Verdane"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("confirm-email") view=ConfirmEmailPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route
                        path=StaticSegment("account")
                        view=|| view! { <ProtectedRoute><AccountPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("checkout")
                        view=|| view! { <ProtectedRoute><CheckoutPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <CartDrawer/>
            <Footer/>
        </Router>
    }
}

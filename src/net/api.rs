//! REST API helpers for the hosted auth + data service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! catalogue fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Order, OrderItem, Product, Subscription, SubscriptionStatus, User};
#[cfg(feature = "hydrate")]
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "hydrate"))]
fn subscription_status_endpoint(subscription_id: &str) -> String {
    format!("/api/subscriptions/{subscription_id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Invalid email or password.".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn action_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Extract the server-supplied error message from a failed response,
/// falling back to a status-based message.
#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response, action: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorResponse {
        error: Option<String>,
    }
    if let Ok(body) = resp.json::<ErrorResponse>().await {
        if let Some(error) = body.error {
            return error;
        }
    }
    action_failed_message(action, resp.status())
}

/// Fetch the currently authenticated user from `/api/auth/session`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Log in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a display-ready message when credentials are rejected or the
/// request fails.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

/// Request a password-reset email via `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/reset-password")
            .json(&EmailRequest { email })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "password reset").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct ConfirmEmailRequest<'a> {
    email: &'a str,
    code: &'a str,
}

/// Verify an email confirmation code via `POST /api/auth/confirm-email`.
///
/// # Errors
///
/// Returns a display-ready message if the code is rejected.
pub async fn confirm_email(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/confirm-email")
            .json(&ConfirmEmailRequest { email, code })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "email confirmation").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Request a fresh confirmation code via `POST /api/auth/resend-confirmation`.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn resend_confirmation(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/resend-confirmation")
            .json(&EmailRequest { email })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "resend confirmation").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Fetch the product catalogue from `/api/products`.
/// Returns `None` on any failure so pages can show an empty-catalogue state.
pub async fn fetch_products() -> Option<Vec<Product>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/products")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Product>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the current user's subscriptions from `/api/subscriptions`.
pub async fn fetch_subscriptions() -> Option<Vec<Subscription>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/subscriptions")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Subscription>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct StatusRequest {
    status: SubscriptionStatus,
}

/// Pause, resume, or cancel a subscription.
///
/// # Errors
///
/// Returns a display-ready message if the transition is rejected.
pub async fn set_subscription_status(
    subscription_id: &str,
    status: SubscriptionStatus,
) -> Result<Subscription, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = subscription_status_endpoint(subscription_id);
        let resp = gloo_net::http::Request::post(&url)
            .json(&StatusRequest { status })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "subscription update").await);
        }
        resp.json::<Subscription>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (subscription_id, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's order history from `/api/orders`.
pub async fn fetch_orders() -> Option<Vec<Order>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/orders")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Order>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceOrderRequest<'a> {
    items: &'a [OrderItem],
}

/// Place an order for the given lines via `POST /api/orders`.
///
/// # Errors
///
/// Returns a display-ready message if the order is rejected.
pub async fn place_order(items: &[OrderItem]) -> Result<Order, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/orders")
            .json(&PlaceOrderRequest { items })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error(resp, "order").await);
        }
        resp.json::<Order>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = items;
        Err("not available on server".to_owned())
    }
}

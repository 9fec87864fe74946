//! Shared wire DTOs for the storefront/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the hosted backend's JSON payloads (camelCase keys) so
//! serde round-trips stay lossless and page code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Preferred first name, if the user provided one.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Whether the account email has been confirmed.
    #[serde(default)]
    pub email_confirmed: bool,
}

/// A purchasable supplement product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier, unique across the catalogue.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Pre-discount price, shown struck through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Ordered display tags (e.g. `"Immunity"`, `"Energy"`).
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
}

/// Lifecycle status of a recurring subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Deliveries are scheduled normally.
    Active,
    /// Deliveries are suspended until the user resumes.
    Paused,
    /// Terminated; kept for history, no further deliveries.
    Cancelled,
}

/// A recurring supplement subscription owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription identifier.
    pub id: String,
    /// Name of the personalized blend being delivered.
    pub plan_name: String,
    /// Price charged per delivery, in dollars.
    pub price: f64,
    /// Delivery cadence in weeks.
    pub frequency_weeks: u32,
    /// Current lifecycle status.
    pub status: SubscriptionStatus,
    /// ISO 8601 date of the next scheduled delivery, if any.
    #[serde(default)]
    pub next_delivery: Option<String>,
}

/// One product line within a placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product identifier at time of purchase.
    pub product_id: i64,
    /// Product name at time of purchase.
    pub name: String,
    /// Unit price charged, in dollars.
    pub price: f64,
    /// Units ordered.
    pub quantity: u32,
}

/// A placed order as returned by the orders endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    pub id: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Order total in dollars.
    pub total: f64,
    /// Fulfilment status (e.g. `"processing"`, `"shipped"`).
    pub status: String,
    /// Product lines included in the order.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

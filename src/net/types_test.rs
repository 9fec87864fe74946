use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_payload() {
    let json = r#"{
        "id": "u-42",
        "email": "member@example.com",
        "firstName": "Dana",
        "emailConfirmed": true
    }"#;
    let user: User = serde_json::from_str(json).expect("user payload");
    assert_eq!(user.id, "u-42");
    assert_eq!(user.first_name.as_deref(), Some("Dana"));
    assert!(user.email_confirmed);
}

#[test]
fn user_optional_fields_default() {
    let json = r#"{"id":"u-1","email":"a@b.com"}"#;
    let user: User = serde_json::from_str(json).expect("user payload");
    assert!(user.first_name.is_none());
    assert!(!user.email_confirmed);
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_deserializes_discount_fields() {
    let json = r#"{
        "id": 3,
        "name": "Daily Essentials",
        "image": "/products/daily.jpg",
        "price": 29.99,
        "originalPrice": 39.99,
        "benefits": ["Immunity", "Energy"],
        "inStock": true
    }"#;
    let product: Product = serde_json::from_str(json).expect("product payload");
    assert_eq!(product.id, 3);
    assert_eq!(product.original_price, Some(39.99));
    assert_eq!(product.benefits, vec!["Immunity", "Energy"]);
    assert!(product.in_stock);
}

#[test]
fn product_without_discount_or_benefits() {
    let json = r#"{"id":1,"name":"Omega","image":"/o.jpg","price":12.5,"inStock":false}"#;
    let product: Product = serde_json::from_str(json).expect("product payload");
    assert!(product.original_price.is_none());
    assert!(product.benefits.is_empty());
    assert!(!product.in_stock);
}

// =============================================================
// Subscription
// =============================================================

#[test]
fn subscription_status_uses_lowercase_wire_values() {
    let json = r#"{
        "id": "sub-1",
        "planName": "Morning Blend",
        "price": 44.0,
        "frequencyWeeks": 4,
        "status": "paused",
        "nextDelivery": "2026-09-15"
    }"#;
    let sub: Subscription = serde_json::from_str(json).expect("subscription payload");
    assert_eq!(sub.status, SubscriptionStatus::Paused);
    assert_eq!(sub.frequency_weeks, 4);
    assert_eq!(sub.next_delivery.as_deref(), Some("2026-09-15"));
}

#[test]
fn subscription_status_serializes_lowercase() {
    let raw = serde_json::to_string(&SubscriptionStatus::Cancelled).expect("serialize");
    assert_eq!(raw, r#""cancelled""#);
}

// =============================================================
// Order
// =============================================================

#[test]
fn order_deserializes_with_items() {
    let json = r#"{
        "id": "ord-7",
        "createdAt": "2026-08-01T12:00:00Z",
        "total": 31.98,
        "status": "processing",
        "items": [
            {"productId": 1, "name": "Saved Product", "price": 15.99, "quantity": 2}
        ]
    }"#;
    let order: Order = serde_json::from_str(json).expect("order payload");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total, 31.98);
}

#[test]
fn order_items_default_to_empty() {
    let json = r#"{"id":"ord-1","createdAt":"2026-08-01","total":0.0,"status":"processing"}"#;
    let order: Order = serde_json::from_str(json).expect("order payload");
    assert!(order.items.is_empty());
}

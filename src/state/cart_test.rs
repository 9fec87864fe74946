use super::*;
use crate::net::types::Product;

fn product(id: i64, price: f64) -> Product {
    Product {
        id,
        name: format!("Blend {id}"),
        image: format!("/products/{id}.jpg"),
        price,
        original_price: None,
        benefits: vec!["Energy".to_owned()],
        in_stock: true,
    }
}

fn totals_match(state: &CartState) -> bool {
    let items: u32 = state.items.iter().map(|i| i.quantity).sum();
    let price: f64 = state.items.iter().map(|i| i.price * f64::from(i.quantity)).sum();
    state.total_items == items && (state.total_price - price).abs() < f64::EPSILON
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_inserts_new_item_with_quantity_one() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].quantity, 1);
    assert_eq!(state.total_items, 1);
    assert_eq!(state.total_price, 15.99);
}

#[test]
fn add_same_id_twice_merges_into_one_line() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let state = reduce(&state, CartAction::Add(product(1, 15.99)));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].quantity, 2);
    assert_eq!(state.total_items, 2);
    assert_eq!(state.total_price, 31.98);
}

#[test]
fn add_preserves_insertion_order() {
    let state = reduce(&CartState::default(), CartAction::Add(product(3, 1.0)));
    let state = reduce(&state, CartAction::Add(product(1, 2.0)));
    let state = reduce(&state, CartAction::Add(product(2, 3.0)));
    let state = reduce(&state, CartAction::Add(product(1, 2.0)));
    let ids: Vec<i64> = state.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn add_saturates_quantity_at_the_ceiling() {
    let maxed = CartItem {
        quantity: u32::MAX,
        ..CartItem::from_product(product(1, 1.0))
    };
    let state = CartState {
        items: vec![maxed],
        ..CartState::default()
    };
    let state = reduce(&state, CartAction::Add(product(1, 1.0)));
    assert_eq!(state.items[0].quantity, u32::MAX);
}

// =============================================================
// Remove
// =============================================================

#[test]
fn remove_deletes_the_line() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let state = reduce(&state, CartAction::Remove { id: 1 });
    assert!(state.items.is_empty());
    assert_eq!(state.total_items, 0);
    assert_eq!(state.total_price, 0.0);
}

#[test]
fn remove_missing_id_leaves_state_unchanged() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let after = reduce(&state, CartAction::Remove { id: 99 });
    assert_eq!(after, state);
}

// =============================================================
// SetQuantity
// =============================================================

#[test]
fn set_quantity_updates_line_and_totals() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let state = reduce(&state, CartAction::SetQuantity { id: 1, quantity: 5 });
    assert_eq!(state.items[0].quantity, 5);
    assert_eq!(state.total_items, 5);
    assert!((state.total_price - 79.95).abs() < 1e-9);
}

#[test]
fn set_quantity_zero_removes_the_line() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let state = reduce(&state, CartAction::SetQuantity { id: 1, quantity: 0 });
    assert!(state.items.is_empty());
    assert_eq!(state.total_items, 0);
}

#[test]
fn set_quantity_negative_clamps_to_zero_and_removes() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let state = reduce(&state, CartAction::SetQuantity { id: 1, quantity: -5 });
    assert!(state.items.is_empty());
}

#[test]
fn set_quantity_missing_id_is_a_no_op() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let after = reduce(&state, CartAction::SetQuantity { id: 99, quantity: 3 });
    assert_eq!(after, state);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_items_and_zeroes_totals() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let state = reduce(&state, CartAction::Add(product(2, 4.50)));
    let state = reduce(&state, CartAction::Clear);
    assert!(state.items.is_empty());
    assert_eq!(state.total_items, 0);
    assert_eq!(state.total_price, 0.0);
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_replaces_items_wholesale_and_recomputes_totals() {
    let state = reduce(&CartState::default(), CartAction::Add(product(9, 1.0)));
    let saved = CartItem {
        id: 1,
        name: "Saved Product".to_owned(),
        image: "/saved.jpg".to_owned(),
        price: 15.99,
        original_price: None,
        quantity: 2,
        benefits: vec!["x".to_owned()],
        in_stock: true,
    };
    let state = reduce(&state, CartAction::Load(vec![saved]));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 1);
    assert_eq!(state.total_items, 2);
    assert_eq!(state.total_price, 31.98);
}

#[test]
fn load_marks_hydration_complete() {
    let state = reduce(&CartState::default(), CartAction::Load(Vec::new()));
    assert!(state.hydrated);
    assert!(state.items.is_empty());
}

#[test]
fn load_drops_zero_quantity_records() {
    let stale = CartItem {
        id: 1,
        name: "Stale".to_owned(),
        image: "/s.jpg".to_owned(),
        price: 9.99,
        original_price: None,
        quantity: 0,
        benefits: Vec::new(),
        in_stock: true,
    };
    let keep = CartItem { id: 2, quantity: 1, ..stale.clone() };
    let state = reduce(&CartState::default(), CartAction::Load(vec![stale, keep]));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggle_open_close_only_touch_visibility() {
    let state = reduce(&CartState::default(), CartAction::Add(product(1, 15.99)));
    let opened = reduce(&state, CartAction::Toggle);
    assert!(opened.is_open);
    assert_eq!(opened.items, state.items);

    let closed = reduce(&opened, CartAction::Close);
    assert!(!closed.is_open);

    let reopened = reduce(&closed, CartAction::Open);
    assert!(reopened.is_open);
    assert_eq!(reopened.total_items, state.total_items);
}

// =============================================================
// Totals invariant
// =============================================================

#[test]
fn totals_hold_at_every_intermediate_state() {
    let actions = vec![
        CartAction::Add(product(1, 15.99)),
        CartAction::Add(product(2, 4.50)),
        CartAction::Add(product(1, 15.99)),
        CartAction::SetQuantity { id: 2, quantity: 7 },
        CartAction::Remove { id: 1 },
        CartAction::SetQuantity { id: 2, quantity: 0 },
        CartAction::Add(product(3, 0.99)),
        CartAction::Clear,
    ];
    let mut state = CartState::default();
    for action in actions {
        state = reduce(&state, action);
        assert!(totals_match(&state), "totals drifted: {state:?}");
    }
}

// =============================================================
// persist_effect
// =============================================================

#[test]
fn clear_deletes_the_durable_record_instead_of_writing_empty() {
    assert_eq!(persist_effect(&CartAction::Clear, true), PersistEffect::Delete);
    // Even before hydration: an explicit clear always erases the record.
    assert_eq!(persist_effect(&CartAction::Clear, false), PersistEffect::Delete);
}

#[test]
fn item_mutations_write_only_after_hydration() {
    let mutations = [
        CartAction::Add(product(1, 15.99)),
        CartAction::Remove { id: 1 },
        CartAction::SetQuantity { id: 1, quantity: 3 },
    ];
    for action in &mutations {
        assert_eq!(persist_effect(action, true), PersistEffect::WriteItems);
        assert_eq!(persist_effect(action, false), PersistEffect::Skip);
    }
}

#[test]
fn load_and_visibility_actions_never_touch_storage() {
    let inert = [
        CartAction::Load(Vec::new()),
        CartAction::Toggle,
        CartAction::Open,
        CartAction::Close,
    ];
    for action in &inert {
        assert_eq!(persist_effect(action, true), PersistEffect::Skip);
        assert_eq!(persist_effect(action, false), PersistEffect::Skip);
    }
}

// =============================================================
// parse_stored_cart
// =============================================================

#[test]
fn parse_treats_absence_empty_and_undefined_as_missing() {
    assert_eq!(parse_stored_cart(None), StoredCart::Missing);
    assert_eq!(parse_stored_cart(Some("")), StoredCart::Missing);
    assert_eq!(parse_stored_cart(Some("undefined")), StoredCart::Missing);
    assert_eq!(parse_stored_cart(Some("[]")), StoredCart::Missing);
}

#[test]
fn parse_classifies_malformed_content_as_corrupt() {
    assert_eq!(parse_stored_cart(Some("invalid json")), StoredCart::Corrupt);
    assert_eq!(parse_stored_cart(Some("{\"id\":1}")), StoredCart::Corrupt);
}

#[test]
fn parse_reads_the_historical_record_format() {
    let raw = r#"[{"id":1,"name":"Saved Product","price":15.99,"image":"/saved.jpg","benefits":["x"],"inStock":true,"quantity":2}]"#;
    let StoredCart::Items(items) = parse_stored_cart(Some(raw)) else {
        panic!("expected items");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Saved Product");
    assert_eq!(items[0].quantity, 2);
    assert!(items[0].in_stock);

    let state = reduce(&CartState::default(), CartAction::Load(items));
    assert_eq!(state.total_items, 2);
    assert_eq!(state.total_price, 31.98);
}

#[test]
fn cart_item_serializes_with_camel_case_keys() {
    let item = CartItem {
        id: 1,
        name: "Blend".to_owned(),
        image: "/b.jpg".to_owned(),
        price: 10.0,
        original_price: Some(12.0),
        quantity: 1,
        benefits: Vec::new(),
        in_stock: true,
    };
    let raw = serde_json::to_string(&item).expect("serialize");
    assert!(raw.contains("\"inStock\":true"));
    assert!(raw.contains("\"originalPrice\":12.0"));
}

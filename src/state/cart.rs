//! Shopping-cart state machine with durable localStorage persistence.
//!
//! DESIGN
//! ======
//! The cart is a pure reducer over an in-memory state tree. Derived totals
//! are recomputed from scratch after every items mutation so they can never
//! drift from the source collection under rapid UI triggers. Persistence is
//! best-effort: writes are gated until the one-time hydration read has
//! completed, and failures are absorbed at the storage boundary.
//!
//! The cart has no dependency on authentication; it behaves identically
//! whether or not a user is logged in.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::Product;
use crate::util::storage;

/// Durable-storage key holding the serialized item sequence.
pub const CART_STORAGE_KEY: &str = "cart";

/// One distinct product line in the basket.
///
/// Serialized with camelCase keys to match the storefront's historical
/// localStorage record format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier; the uniqueness key within the cart.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Pre-discount price, used only for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Units in the basket; always >= 1 while the item exists.
    pub quantity: u32,
    /// Ordered display tags.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Stock flag; quantity-increase policy lives at the UI boundary, the
    /// reducer stays permissive.
    pub in_stock: bool,
}

impl CartItem {
    fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            price: product.price,
            original_price: product.original_price,
            quantity: 1,
            benefits: product.benefits,
            in_stock: product.in_stock,
        }
    }
}

/// The aggregate cart state.
///
/// `total_items` and `total_price` are always exactly the reduction over
/// `items`; they are never set independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    /// Basket lines in insertion order; `id` is unique.
    pub items: Vec<CartItem>,
    /// Whether the cart drawer is visible. No bearing on checkout.
    pub is_open: bool,
    /// Sum of all quantities.
    pub total_items: u32,
    /// Sum of `price * quantity` over all items.
    pub total_price: f64,
    /// Set once the initial storage read has completed; gates writes so the
    /// default empty state can never clobber a not-yet-read durable cart.
    pub hydrated: bool,
}

/// State transitions accepted by the cart reducer.
#[derive(Clone, Debug)]
pub enum CartAction {
    /// Add one unit of a product, merging with an existing line by id.
    Add(Product),
    /// Remove a line entirely; no-op if absent.
    Remove { id: i64 },
    /// Set a line's quantity, clamped at zero; zero removes the line.
    SetQuantity { id: i64, quantity: i64 },
    /// Empty the basket.
    Clear,
    /// Replace the basket wholesale from the durable record and mark
    /// hydration complete.
    Load(Vec<CartItem>),
    /// Flip drawer visibility.
    Toggle,
    /// Show the drawer.
    Open,
    /// Hide the drawer.
    Close,
}

/// Classification of the raw durable record.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredCart {
    /// Absent, empty, or the literal `"undefined"`; nothing to load.
    Missing,
    /// A well-formed, non-empty item sequence.
    Items(Vec<CartItem>),
    /// Present but unparseable; must be deleted so it cannot fail again.
    Corrupt,
}

/// Classify the raw localStorage record for the cart key.
pub fn parse_stored_cart(raw: Option<&str>) -> StoredCart {
    let Some(raw) = raw else {
        return StoredCart::Missing;
    };
    if raw.is_empty() || raw == "undefined" {
        return StoredCart::Missing;
    }
    match serde_json::from_str::<Vec<CartItem>>(raw) {
        Ok(items) if items.is_empty() => StoredCart::Missing,
        Ok(items) => StoredCart::Items(items),
        Err(_) => StoredCart::Corrupt,
    }
}

/// Pure cart reducer: `(state, action) -> state`.
///
/// Deterministic by construction; no branch depends on anything other than
/// the action payload and the current state.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    let mut next = state.clone();
    match action {
        CartAction::Add(product) => {
            if let Some(item) = next.items.iter_mut().find(|item| item.id == product.id) {
                item.quantity = item.quantity.saturating_add(1);
            } else {
                next.items.push(CartItem::from_product(product));
            }
            recompute_totals(&mut next);
        }
        CartAction::Remove { id } => {
            next.items.retain(|item| item.id != id);
            recompute_totals(&mut next);
        }
        CartAction::SetQuantity { id, quantity } => {
            let clamped = quantity.max(0);
            if clamped == 0 {
                next.items.retain(|item| item.id != id);
            } else if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
                item.quantity = u32::try_from(clamped).unwrap_or(u32::MAX);
            }
            recompute_totals(&mut next);
        }
        CartAction::Clear => {
            next.items.clear();
            recompute_totals(&mut next);
        }
        CartAction::Load(items) => {
            next.items = items;
            // Enforce the no-zero-quantity invariant on records written by
            // older clients.
            next.items.retain(|item| item.quantity > 0);
            next.hydrated = true;
            recompute_totals(&mut next);
        }
        CartAction::Toggle => next.is_open = !next.is_open,
        CartAction::Open => next.is_open = true,
        CartAction::Close => next.is_open = false,
    }
    next
}

/// Durable-storage consequence of dispatching an action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PersistEffect {
    /// No storage traffic.
    Skip,
    /// Write the post-action item sequence under the cart key.
    WriteItems,
    /// Delete the stored record outright.
    Delete,
}

/// Which durable-storage call, if any, dispatching `action` triggers.
///
/// Clear deletes the record rather than writing an empty list, so a corrupt
/// or partial write can never resurrect stale items. Item mutations write
/// only once the initial hydration read has completed; the hydration load
/// itself and drawer visibility changes never touch storage.
pub fn persist_effect(action: &CartAction, hydrated: bool) -> PersistEffect {
    match action {
        CartAction::Clear => PersistEffect::Delete,
        CartAction::Add(_) | CartAction::Remove { .. } | CartAction::SetQuantity { .. }
            if hydrated =>
        {
            PersistEffect::WriteItems
        }
        _ => PersistEffect::Skip,
    }
}

fn recompute_totals(state: &mut CartState) {
    state.total_items = state.items.iter().map(|item| item.quantity).sum();
    state.total_price = state
        .items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();
}

/// Shared cart handle provided via context at the application root.
///
/// Mutation goes through the dispatchable actions only; components read the
/// reactive state signal and call the operation methods.
#[derive(Clone, Copy)]
pub struct CartContext {
    state: RwSignal<CartState>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CartState::default()),
        }
    }

    /// Reactive cart state for rendering.
    pub fn state(self) -> RwSignal<CartState> {
        self.state
    }

    /// One-time load of the durable cart record into state.
    ///
    /// Corrupt records are deleted on detection so they cannot repeatedly
    /// fail on subsequent loads. Hydration completes (and unlocks writes)
    /// on success and failure alike.
    pub fn hydrate(self) {
        let raw = storage::local_get(CART_STORAGE_KEY);
        let items = match parse_stored_cart(raw.as_deref()) {
            StoredCart::Items(items) => items,
            StoredCart::Missing => Vec::new(),
            StoredCart::Corrupt => {
                storage::local_remove(CART_STORAGE_KEY);
                Vec::new()
            }
        };
        self.dispatch(CartAction::Load(items));
    }

    /// Add one unit of `product`, merging with an existing line by id.
    pub fn add_item(self, product: Product) {
        self.dispatch(CartAction::Add(product));
    }

    /// Remove the line with `id`; no-op if absent.
    pub fn remove_item(self, id: i64) {
        self.dispatch(CartAction::Remove { id });
    }

    /// Set the quantity for `id`; zero or negative removes the line.
    pub fn update_quantity(self, id: i64, quantity: i64) {
        self.dispatch(CartAction::SetQuantity { id, quantity });
    }

    /// Empty the basket and erase the durable copy.
    pub fn clear_cart(self) {
        self.dispatch(CartAction::Clear);
    }

    /// Flip drawer visibility.
    pub fn toggle_cart(self) {
        self.dispatch(CartAction::Toggle);
    }

    /// Show the drawer.
    pub fn open_cart(self) {
        self.dispatch(CartAction::Open);
    }

    /// Hide the drawer.
    pub fn close_cart(self) {
        self.dispatch(CartAction::Close);
    }

    fn dispatch(self, action: CartAction) {
        let current = self.state.get_untracked();
        let effect = persist_effect(&action, current.hydrated);
        let next = reduce(&current, action);
        match effect {
            PersistEffect::Delete => storage::local_remove(CART_STORAGE_KEY),
            PersistEffect::WriteItems => storage::local_set_json(CART_STORAGE_KEY, &next.items),
            PersistEffect::Skip => {}
        }
        self.state.set(next);
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

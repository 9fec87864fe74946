//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod cart_drawer;
pub mod footer;
pub mod header;
pub mod product_card;
pub mod protected_route;

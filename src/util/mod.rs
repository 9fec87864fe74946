//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod format;
pub mod guard;
pub mod storage;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `auth`) so individual components can
//! depend on small focused models. Each domain exposes a context handle
//! constructed once at the application root and provided to subtrees; no
//! hidden globals.

pub mod auth;
pub mod cart;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod account;
pub mod checkout;
pub mod confirm_email;
pub mod home;
pub mod login;
pub mod products;
pub mod reset_password;

//! Networking modules for the hosted auth + data service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the managed backend and `types` defines
//! the shared wire schema. The backend is an external collaborator; nothing
//! in this crate assumes anything about its internals beyond these routes.

pub mod api;
pub mod types;

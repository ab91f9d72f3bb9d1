//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps each backend endpoint in a typed async call and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;

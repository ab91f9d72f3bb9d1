//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Only the auth session is shared across routes today.

pub mod auth;

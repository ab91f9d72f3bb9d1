//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers. `ProtectedRoute`
//! is the only component that issues navigation on its own.

pub mod loading;
pub mod plan_card;
pub mod protected_route;
pub mod site_header;

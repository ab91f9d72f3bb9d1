//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep policy and formatting logic out of page and component
//! code so it can be unit-tested without a browser.

pub mod auth;
pub mod format;
pub mod route_gate;
pub mod validate;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and form handling and delegates
//! shared rendering to `components`. Pages never check authorization
//! themselves; `app` wraps protected pages in `ProtectedRoute`.

pub mod admin;
pub mod affiliate;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod support;
pub mod vendor;
pub mod vendor_onboarding;

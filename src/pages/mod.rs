//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages read auth through `use_auth`; gating happens in `app` where each
//! protected page is wrapped in its route guard.

pub mod admin;
pub mod dashboard;
pub mod login;

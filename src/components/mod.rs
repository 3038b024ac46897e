//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_provider` owns the auth context; `route_guard` gates route subtrees
//! on it.

pub mod auth_provider;
pub mod route_guard;

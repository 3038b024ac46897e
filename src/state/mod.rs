//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only auth state is global; page-local state stays in the pages.

pub mod auth;

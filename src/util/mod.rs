//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep router-facing policy out of page and component code
//! so it can be tested without a browser.

pub mod auth;

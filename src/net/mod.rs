//! Networking modules for authenticated REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single choke point for authorized requests, `transport`
//! is the raw HTTP layer beneath it, `api` holds the auth endpoints, and
//! `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod transport;
pub mod types;

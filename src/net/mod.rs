//! Networking modules for the HR back-end's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and decodes replies, `browser` performs the HTTP
//! calls from the page, and `types` defines the wire schema.

pub mod api;
pub mod browser;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and payload rules from panel and
//! component logic so they can be tested without a browser.

pub mod format;
pub mod upload;

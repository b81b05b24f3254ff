//! Client-side state for the employee record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain Rust types and controllers, independent of Leptos signals.
//! Components own the signals and mirror controller output into them;
//! everything here is testable natively.

pub mod controller;
pub mod extra_hours;
pub mod notifier;
pub mod panel;
pub mod records;
pub mod sequence;
pub mod status;

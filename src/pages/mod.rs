//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! A page owns page-scoped orchestration (which tab is active) and
//! delegates rendering details to `components`.

pub mod employee_profile;

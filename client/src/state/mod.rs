//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `signup`, `banner`) so pages can
//! depend on small focused models with testable transitions.

pub mod auth;
pub mod banner;
pub mod signup;

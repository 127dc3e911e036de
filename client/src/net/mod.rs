//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `provider` is the seam pages depend on,
//! `registration` turns a sign-up reply into a UI outcome, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod provider;
pub mod registration;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod types;

//! Outbound services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own provider I/O so route handlers can stay focused on
//! protocol translation and cookie plumbing.

pub mod supabase;

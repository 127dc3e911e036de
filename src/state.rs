//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the optional GoTrue handle plus cookie policy.
//! `supabase` is `None` when the provider configuration is missing, and the
//! auth endpoints answer 503 in that case.

use crate::services::supabase::SupabaseAuth;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `SupabaseAuth` shares its HTTP pool on clone.
#[derive(Clone)]
pub struct AppState {
    pub supabase: Option<SupabaseAuth>,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(supabase: Option<SupabaseAuth>, cookie_secure: bool) -> Self {
        Self { supabase, cookie_secure }
    }
}

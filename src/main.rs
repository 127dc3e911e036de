mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::{ServerConfig, load_dotenv};
use crate::services::supabase::{SupabaseAuth, SupabaseConfig};

#[tokio::main]
async fn main() {
    let env_files = load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::debug!(?env_files, "loaded env files");

    let config = ServerConfig::from_env().expect("invalid server configuration");

    // Missing provider config is non-fatal: pages render, auth endpoints answer 503.
    let supabase = match SupabaseConfig::from_env() {
        Ok(supabase_config) => {
            tracing::info!(url = %supabase_config.url, "auth provider configured");
            Some(SupabaseAuth::new(supabase_config, reqwest::Client::new()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "auth provider not configured; sign-up disabled");
            None
        }
    };

    let state = state::AppState::new(supabase, config.cookie_secure);
    let app = routes::leptos_app(state).expect("failed to build router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(%config, "practice-english listening");
    axum::serve(listener, app).await.expect("server failed");
}

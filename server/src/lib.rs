mod auth_routes;
mod config;
mod platform;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use types::{Result, SESSION_COOKIE_NAME, UserSession, decode_session, err};

pub use crate::config::CONFIG;
pub use crate::platform::PLATFORM_CLIENT;

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

pub async fn init() -> Result<Router> {
    // Touching CONFIG here makes a bad environment fail at startup rather
    // than on the first request.
    tracing::info!(platform_url = %CONFIG.platform_url, "scolaris server starting");

    Ok(auth_routes::auth_router())
}

/// Extract the user session from the request cookie.
pub async fn get_session_from_cookie() -> Result<UserSession> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|_| err!("request context unavailable"))?;

    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("no cookies in request"))?;

    for cookie_str in cookie_header.split(';') {
        let cookie_str = cookie_str.trim();
        if let Some(value) = cookie_str.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) {
            return decode_session(value);
        }
    }

    Err(err!("session cookie not found"))
}

/// Require an authenticated Directeur d'Établissement session.
///
/// Mirrors the platform's own rule: only the DE may create accounts and
/// pedagogical spaces. The platform re-checks on every call.
pub async fn require_de_session() -> Result<UserSession> {
    let session = get_session_from_cookie().await?;

    if !session.is_de() {
        return Err(err!(
            "Seul un Directeur d'Établissement peut effectuer cette action"
        ));
    }

    Ok(session)
}

use axum::{
    Form, Router,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use cookie::Cookie;
use serde::Deserialize;
use types::{SESSION_COOKIE_NAME, encode_session};

use crate::{CONFIG, platform::PLATFORM_CLIENT};

pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    mot_de_passe: String,
}

async fn login(Form(form): Form<LoginForm>) -> impl IntoResponse {
    let session = match PLATFORM_CLIENT.login(&form.email, &form.mot_de_passe).await {
        Ok(session) => session,
        Err(error) => {
            tracing::warn!(email = %form.email, "login refused by platform");
            return Redirect::to(&login_error_target(&error.message)).into_response();
        }
    };

    // Authorization is enforced per call (`require_de_session`) and by the
    // layout; any platform account may hold a session.
    match encode_session(&session) {
        Ok(value) => {
            let cookie = session_cookie(value, CONFIG.cookie_secure);
            ([(SET_COOKIE, cookie.to_string())], Redirect::to("/")).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to encode session");
            Redirect::to(&login_error_target("Connexion impossible")).into_response()
        }
    }
}

async fn logout() -> impl IntoResponse {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.set_max_age(cookie::time::Duration::ZERO);

    ([(SET_COOKIE, cookie.to_string())], Redirect::to("/login"))
}

fn login_error_target(message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("/login?error={encoded}")
}

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(secure);
    cookie.set_same_site(cookie::SameSite::Lax);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_error_target_is_url_encoded() {
        assert_eq!(
            login_error_target("Identifiants invalides"),
            "/login?error=Identifiants+invalides"
        );
    }

    #[test]
    fn session_cookie_is_http_only_and_scoped_to_root() {
        let cookie = session_cookie("abc".into(), false);
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
    }
}

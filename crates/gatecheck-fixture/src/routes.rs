//! Axum routes for the login fixture

use crate::{auth, templates};
use axum::{
    extract::Form,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the fixture application
pub fn router() -> Router {
    Router::new()
        .route("/login", get(login_form).post(submit_login))
        .route("/dashboard", get(dashboard))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

/// GET /login - the form page
async fn login_form() -> Html<String> {
    Html(templates::login_page(None))
}

/// Form body of a login submission
#[derive(Debug, Deserialize)]
struct LoginSubmission {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    /// Present ("1") when the checkbox was checked, absent otherwise
    #[serde(default)]
    remember_me: Option<String>,
}

/// POST /login - check credentials, establish the session or re-render
/// the form with the error banner
async fn submit_login(Form(submission): Form<LoginSubmission>) -> Response {
    if !auth::verify(&submission.email, &submission.password) {
        info!(email = %submission.email, "Rejected login attempt");
        return Html(templates::login_page(Some(auth::INVALID_CREDENTIALS_ERROR))).into_response();
    }

    info!(email = %submission.email, remember_me = submission.remember_me.is_some(), "Accepted login");

    let session_cookie = match HeaderValue::from_str(&auth::session_cookie(&submission.email)) {
        Ok(value) => value,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let mut response = Redirect::to("/dashboard").into_response();
    response.headers_mut().append(SET_COOKIE, session_cookie);

    if submission.remember_me.is_some() {
        if let Ok(value) = HeaderValue::from_str(&auth::remember_cookie()) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

/// GET /dashboard - session-gated landing page
async fn dashboard(headers: HeaderMap) -> Response {
    let cookie_header = headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    match auth::session_from_cookies(cookie_header) {
        Some(email) => Html(templates::dashboard_page(&email)).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "gatecheck-fixture"
    }))
}

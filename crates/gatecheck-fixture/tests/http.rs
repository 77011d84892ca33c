//! HTTP-level integration tests for the login fixture
//!
//! These exercise the fixture's externally observable contract without
//! a browser: form markup, credential checking, cookies, redirects.
//! Every test starts its own fixture on an ephemeral port.

use gatecheck_fixture::{
    FixtureServer, INVALID_CREDENTIALS_ERROR, REMEMBER_ME_COOKIE, SESSION_COOKIE, TEST_EMAIL,
    TEST_PASSWORD,
};
use gatecheck_pages::locators;
use reqwest::{header, redirect::Policy, Client, StatusCode};

fn client() -> Client {
    // Redirects stay visible so the tests can assert on them
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("build client")
}

fn set_cookies(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// `[data-testid="email-input"]` -> `data-testid="email-input"`
fn attribute_of(selector: &str) -> &str {
    selector
        .trim_start_matches('[')
        .trim_end_matches(']')
}

#[tokio::test]
async fn login_form_carries_every_locator() {
    let server = FixtureServer::start().expect("start fixture");

    let response = client()
        .get(format!("{}/login", server.base_url()))
        .send()
        .await
        .expect("GET /login");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("body");
    for selector in [
        locators::EMAIL_INPUT,
        locators::PASSWORD_INPUT,
        locators::REMEMBER_ME_CHECKBOX,
        locators::LOGIN_BUTTON,
        locators::EMAIL_ERROR,
        locators::PASSWORD_ERROR,
    ] {
        assert!(
            body.contains(attribute_of(selector)),
            "login form is missing {}",
            selector
        );
    }

    // No error banner on a fresh form
    assert!(!body.contains(attribute_of(locators::ERROR_MESSAGE)));
}

#[tokio::test]
async fn valid_login_redirects_with_a_session() {
    let server = FixtureServer::start().expect("start fixture");

    let response = client()
        .post(format!("{}/login", server.base_url()))
        .form(&[("email", TEST_EMAIL), ("password", TEST_PASSWORD)])
        .send()
        .await
        .expect("POST /login");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/dashboard")
    );

    let cookies = set_cookies(&response);
    assert!(cookies
        .iter()
        .any(|cookie| cookie.starts_with(SESSION_COOKIE) && cookie.contains(TEST_EMAIL)));
    // Remember-me was not requested
    assert!(!cookies
        .iter()
        .any(|cookie| cookie.starts_with(REMEMBER_ME_COOKIE)));
}

#[tokio::test]
async fn remember_me_sets_a_persistent_cookie() {
    let server = FixtureServer::start().expect("start fixture");

    let response = client()
        .post(format!("{}/login", server.base_url()))
        .form(&[
            ("email", TEST_EMAIL),
            ("password", TEST_PASSWORD),
            ("remember_me", "1"),
        ])
        .send()
        .await
        .expect("POST /login");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookies = set_cookies(&response);
    let remember = cookies
        .iter()
        .find(|cookie| cookie.starts_with(REMEMBER_ME_COOKIE))
        .expect("remember_me cookie");

    let value = remember
        .trim_start_matches(REMEMBER_ME_COOKIE)
        .trim_start_matches('=')
        .split(';')
        .next()
        .unwrap_or("");
    assert!(!value.is_empty(), "remember_me cookie value is empty");
}

#[tokio::test]
async fn wrong_password_rerenders_with_the_banner() {
    let server = FixtureServer::start().expect("start fixture");

    let response = client()
        .post(format!("{}/login", server.base_url()))
        .form(&[("email", TEST_EMAIL), ("password", "wrongpassword")])
        .send()
        .await
        .expect("POST /login");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());

    let body = response.text().await.expect("body");
    assert!(body.contains(attribute_of(locators::ERROR_MESSAGE)));
    assert!(body.contains(INVALID_CREDENTIALS_ERROR));
    // The form stays usable after a rejection
    assert!(body.contains(attribute_of(locators::EMAIL_INPUT)));
    assert!(body.contains(attribute_of(locators::PASSWORD_INPUT)));
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let server = FixtureServer::start().expect("start fixture");
    let url = format!("{}/dashboard", server.base_url());

    let response = client().get(&url).send().await.expect("GET /dashboard");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/login")
    );

    let response = client()
        .get(&url)
        .header(header::COOKIE, format!("{}={}", SESSION_COOKIE, TEST_EMAIL))
        .send()
        .await
        .expect("GET /dashboard with session");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("body");
    assert!(body.contains(attribute_of(locators::USERNAME_DISPLAY)));
    assert!(body.contains(TEST_EMAIL));
}

#[tokio::test]
async fn health_reports_ok() {
    let server = FixtureServer::start().expect("start fixture");

    let response = client()
        .get(format!("{}/health", server.base_url()))
        .send()
        .await
        .expect("GET /health");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "ok");
}

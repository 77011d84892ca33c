//! Credential checking and cookie handling for the login fixture

/// The one seeded account
pub const TEST_EMAIL: &str = "test@example.com";
pub const TEST_PASSWORD: &str = "password123";

/// Banner text for a rejected submission
pub const INVALID_CREDENTIALS_ERROR: &str = "Invalid email or password";

/// Session cookie set after a successful login
pub const SESSION_COOKIE: &str = "gatecheck_session";

/// Persistence cookie set when remember-me was checked
pub const REMEMBER_ME_COOKIE: &str = "remember_me";

/// Remember-me lifetime: 30 days
const REMEMBER_ME_MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;

/// Check submitted credentials against the seeded account
pub fn verify(email: &str, password: &str) -> bool {
    email == TEST_EMAIL && password == TEST_PASSWORD
}

/// `Set-Cookie` value establishing the session
pub fn session_cookie(email: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, email)
}

/// `Set-Cookie` value for the remember-me persistence cookie
pub fn remember_cookie() -> String {
    format!(
        "{}=1; Path=/; Max-Age={}",
        REMEMBER_ME_COOKIE, REMEMBER_ME_MAX_AGE_SECS
    )
}

/// Extract the session value from a `Cookie` request header
pub fn session_from_cookies(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

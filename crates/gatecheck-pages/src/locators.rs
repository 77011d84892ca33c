//! Locator set for the login flow
//!
//! One stable `data-testid` selector per logical field, constant for
//! the lifetime of a page object. Selectors use double quotes so they
//! can be embedded into the session's script-based queries.

/// Email address input on the login form
pub const EMAIL_INPUT: &str = r#"[data-testid="email-input"]"#;

/// Password input on the login form
pub const PASSWORD_INPUT: &str = r#"[data-testid="password-input"]"#;

/// Remember-me checkbox
pub const REMEMBER_ME_CHECKBOX: &str = r#"[data-testid="remember-me-checkbox"]"#;

/// Submit button
pub const LOGIN_BUTTON: &str = r#"[data-testid="login-button"]"#;

/// Error banner shown after a rejected submission
pub const ERROR_MESSAGE: &str = r#"[data-testid="error-message"]"#;

/// Inline validation indicator for the email field
pub const EMAIL_ERROR: &str = r#"[data-testid="email-error"]"#;

/// Inline validation indicator for the password field
pub const PASSWORD_ERROR: &str = r#"[data-testid="password-error"]"#;

/// Username display on the dashboard after login
pub const USERNAME_DISPLAY: &str = r#"[data-testid="username"]"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&str] = &[
        EMAIL_INPUT,
        PASSWORD_INPUT,
        REMEMBER_ME_CHECKBOX,
        LOGIN_BUTTON,
        ERROR_MESSAGE,
        EMAIL_ERROR,
        PASSWORD_ERROR,
        USERNAME_DISPLAY,
    ];

    #[test]
    fn test_each_field_has_one_distinct_selector() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_selectors_are_script_embeddable() {
        // The session embeds selectors into single-quoted JS strings
        for selector in ALL {
            assert!(selector.starts_with("[data-testid="));
            assert!(!selector.contains('\''));
            assert!(!selector.contains('\\'));
        }
    }
}

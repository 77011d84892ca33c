//! Shared data types for the login scenarios

use serde::{Deserialize, Serialize};

/// Credentials submitted through the login form
///
/// Input only: nothing here is persisted, and no validation happens on
/// this side. The application under test owns all credential checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Ask the application to persist the session ("remember me")
    #[serde(default)]
    pub remember_me: bool,
}

impl Credentials {
    /// Credentials without the remember-me option
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Enable the remember-me option
    pub fn with_remember_me(mut self) -> Self {
        self.remember_me = true;
        self
    }
}

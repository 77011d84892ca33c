//! Page object for the login page

use crate::{join_url, locators};
use gatecheck_browser::BrowserSession;
use gatecheck_core::{Credentials, Result};
use std::time::Duration;
use tracing::{debug, info};

/// How long `error_message` lets the banner settle before reporting
/// the no-error sentinel
const BANNER_WAIT: Duration = Duration::from_secs(5);

/// Wrapper for the login page
///
/// Borrows an active browser session; create one fresh per scenario.
/// All waits are delegated to the automation framework.
pub struct LoginPage<'a> {
    session: &'a BrowserSession,
    base_url: String,
}

impl<'a> LoginPage<'a> {
    pub fn new(session: &'a BrowserSession, base_url: &str) -> Self {
        Self {
            session,
            base_url: base_url.to_string(),
        }
    }

    /// URL of the login page
    pub fn url(&self) -> String {
        join_url(&self.base_url, "/login")
    }

    /// Load the login page and wait for the form to be present
    pub async fn navigate(&self) -> Result<()> {
        info!("Opening login page");
        self.session.navigate(&self.url()).await?;
        self.session
            .wait_for_element(locators::EMAIL_INPUT, None)
            .await
    }

    /// Fill the form and submit it
    ///
    /// No validation happens here; the page under test owns it. On
    /// success the page navigates away, on rejection it re-renders
    /// with an error banner.
    pub async fn submit_login(&self, credentials: &Credentials) -> Result<()> {
        info!(email = %credentials.email, remember_me = credentials.remember_me, "Submitting login");

        self.session
            .fill(locators::EMAIL_INPUT, &credentials.email)
            .await?;
        self.session
            .fill(locators::PASSWORD_INPUT, &credentials.password)
            .await?;

        if credentials.remember_me {
            self.session
                .set_checked(locators::REMEMBER_ME_CHECKBOX, true)
                .await?;
        }

        self.session.click(locators::LOGIN_BUTTON).await
    }

    /// Click submit without touching any field
    pub async fn submit_empty(&self) -> Result<()> {
        debug!("Submitting empty form");
        self.session.click(locators::LOGIN_BUTTON).await
    }

    /// Text of the visible error banner, or an empty string when no
    /// banner is present
    ///
    /// A rejected submission re-renders the page, so the banner gets
    /// the framework's wait first; absence after that is the "no
    /// error" sentinel, never a failure.
    pub async fn error_message(&self) -> Result<String> {
        if self
            .session
            .wait_for_element(locators::ERROR_MESSAGE, Some(BANNER_WAIT))
            .await
            .is_err()
        {
            return Ok(String::new());
        }

        self.session.text_content(locators::ERROR_MESSAGE).await
    }

    /// Whether the email field's inline validation indicator is visible
    pub async fn has_email_field_error(&self) -> Result<bool> {
        self.session.is_visible(locators::EMAIL_ERROR).await
    }

    /// Whether the password field's inline validation indicator is visible
    pub async fn has_password_field_error(&self) -> Result<bool> {
        self.session.is_visible(locators::PASSWORD_ERROR).await
    }

    /// Whether the browser is still on the login page
    pub async fn is_open(&self) -> Result<bool> {
        let url = self.session.current_url().await?;
        Ok(url.contains("/login"))
    }
}

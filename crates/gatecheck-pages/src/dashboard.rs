//! Page object for the post-login dashboard

use crate::{join_url, locators};
use gatecheck_browser::BrowserSession;
use gatecheck_core::Result;
use std::time::Duration;
use tracing::info;

/// Wrapper for the dashboard reached after a successful login
pub struct DashboardPage<'a> {
    session: &'a BrowserSession,
    base_url: String,
}

impl<'a> DashboardPage<'a> {
    pub fn new(session: &'a BrowserSession, base_url: &str) -> Self {
        Self {
            session,
            base_url: base_url.to_string(),
        }
    }

    /// URL of the dashboard
    pub fn url(&self) -> String {
        join_url(&self.base_url, "/dashboard")
    }

    /// Wait until the browser has reached the dashboard URL
    ///
    /// Returns the URL that matched.
    pub async fn wait_until_open(&self, timeout: Duration) -> Result<String> {
        info!("Waiting for dashboard redirect");
        self.session.wait_for_url_prefix(&self.url(), timeout).await
    }

    /// Whether the browser is currently on the dashboard
    pub async fn is_open(&self) -> Result<bool> {
        let url = self.session.current_url().await?;
        Ok(url.starts_with(&self.url()))
    }

    /// Text of the username display
    pub async fn username_text(&self) -> Result<String> {
        self.session
            .wait_for_element(locators::USERNAME_DISPLAY, None)
            .await?;
        self.session.text_content(locators::USERNAME_DISPLAY).await
    }
}

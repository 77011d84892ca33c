//! Browser lifecycle and page interaction using Chrome DevTools Protocol

use crate::error::Result;
use gatecheck_core::{GatecheckError, SuiteConfig};
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Timeout for navigation and element waits, in seconds
    pub timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 800,
            timeout_secs: 30,
        }
    }
}

impl BrowserConfig {
    /// Derive browser settings from the suite configuration
    pub fn from_suite(config: &SuiteConfig) -> Self {
        Self {
            headless: config.headless,
            window_width: config.window_width,
            window_height: config.window_height,
            timeout_secs: config.nav_timeout_secs,
        }
    }
}

/// A cookie observed in the browser's cookie jar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieInfo {
    pub name: String,
    pub value: String,
}

/// Active browser session with Chrome DevTools Protocol
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| GatecheckError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| GatecheckError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| GatecheckError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and wait for the navigation to complete
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| GatecheckError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| GatecheckError::Browser(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Wait for an element to appear
    ///
    /// Delegates entirely to the framework's wait; absence after the
    /// timeout maps to `ElementNotFound`.
    pub async fn wait_for_element(&self, selector: &str, timeout: Option<Duration>) -> Result<()> {
        let timeout_duration =
            timeout.unwrap_or_else(|| Duration::from_secs(self.config.timeout_secs));

        debug!("Waiting for element: {} (timeout: {:?})", selector, timeout_duration);

        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout_duration)
            .map_err(|_e| GatecheckError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        debug!("Element found: {}", selector);
        Ok(())
    }

    /// Focus an element and type text into it
    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Filling {} ({} chars)", selector, text.len());

        let element = self.tab.wait_for_element(selector).map_err(|_e| {
            GatecheckError::ElementNotFound {
                selector: selector.to_string(),
            }
        })?;

        element
            .click()
            .map_err(|e| GatecheckError::Browser(format!("Failed to focus {}: {}", selector, e)))?;

        element
            .type_into(text)
            .map_err(|e| GatecheckError::Browser(format!("Failed to type into {}: {}", selector, e)))?;

        Ok(())
    }

    /// Click an element
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking {}", selector);

        let element = self.tab.wait_for_element(selector).map_err(|_e| {
            GatecheckError::ElementNotFound {
                selector: selector.to_string(),
            }
        })?;

        element
            .click()
            .map_err(|e| GatecheckError::Browser(format!("Failed to click {}: {}", selector, e)))?;

        Ok(())
    }

    /// Drive a checkbox to the requested state
    ///
    /// Clicks only when the current state differs, so the call is safe
    /// to repeat.
    pub async fn set_checked(&self, selector: &str, checked: bool) -> Result<()> {
        script_safe(selector)?;

        let script = format!("document.querySelector('{}')?.checked === true", selector);
        let current = self
            .evaluate_script(&script)
            .await?
            .as_bool()
            .unwrap_or(false);

        if current != checked {
            self.click(selector).await?;
        }

        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| GatecheckError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get the current page title
    pub async fn title(&self) -> Result<String> {
        let result = self.evaluate_script("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get the current URL
    pub async fn current_url(&self) -> Result<String> {
        let result = self.evaluate_script("window.location.href").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Wait until the current URL starts with the given prefix
    ///
    /// Polls the framework-reported URL; returns the URL that matched,
    /// or an error once the timeout elapses.
    pub async fn wait_for_url_prefix(&self, prefix: &str, timeout: Duration) -> Result<String> {
        let start = Instant::now();

        loop {
            let url = self.current_url().await?;
            if url.starts_with(prefix) {
                debug!("URL reached {}", prefix);
                return Ok(url);
            }

            if start.elapsed() >= timeout {
                return Err(GatecheckError::Browser(format!(
                    "Timed out waiting for URL starting with {} (last seen: {})",
                    prefix, url
                )));
            }

            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    /// Check whether an element is currently rendered
    ///
    /// Absent elements and elements hidden via `display: none` or
    /// `visibility: hidden` both report `false`; absence is never an
    /// error.
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        script_safe(selector)?;

        let script = format!(
            "(() => {{ const el = document.querySelector('{}'); if (!el) return false; \
             const style = window.getComputedStyle(el); \
             return style.display !== 'none' && style.visibility !== 'hidden'; }})()",
            selector
        );

        let result = self.evaluate_script(&script).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    /// Get text content of an element, or an empty string if absent
    pub async fn text_content(&self, selector: &str) -> Result<String> {
        script_safe(selector)?;

        let script = format!("document.querySelector('{}')?.textContent", selector);
        let result = self.evaluate_script(&script).await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// All cookies visible to the current page
    pub async fn cookies(&self) -> Result<Vec<CookieInfo>> {
        let cookies = self
            .tab
            .get_cookies()
            .map_err(|e| GatecheckError::Browser(format!("Failed to read cookies: {}", e)))?;

        Ok(cookies
            .into_iter()
            .map(|c| CookieInfo {
                name: c.name,
                value: c.value,
            })
            .collect())
    }

    /// Look up one cookie by name
    pub async fn cookie(&self, name: &str) -> Result<Option<CookieInfo>> {
        Ok(self.cookies().await?.into_iter().find(|c| c.name == name))
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped and cleaned up automatically
        Ok(())
    }
}

/// Reject selectors that cannot be embedded into a single-quoted JS string
fn script_safe(selector: &str) -> Result<()> {
    if selector.contains('\'') || selector.contains('\\') {
        return Err(GatecheckError::Browser(format!(
            "Selector cannot be embedded in a script: {}",
            selector
        )));
    }
    Ok(())
}

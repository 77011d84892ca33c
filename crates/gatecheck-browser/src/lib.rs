//! Browser automation wrapper for the Gatecheck suite
//!
//! This crate wraps the Chrome DevTools Protocol client
//! (`headless_chrome`) behind a [`BrowserSession`] with the primitives
//! the page objects need: navigation, form interaction, element
//! queries, cookies, and screenshots. Waiting and retrying stay inside
//! the automation framework; nothing here polls the DOM on its own
//! beyond delegating to the framework's wait calls.
//!
//! # Example
//!
//! ```no_run
//! use gatecheck_browser::BrowserSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::launch().await?;
//!     session.navigate("http://127.0.0.1:8780/login").await?;
//!
//!     session.fill(r#"[data-testid="email-input"]"#, "test@example.com").await?;
//!     session.click(r#"[data-testid="login-button"]"#).await?;
//!
//!     println!("now at {}", session.current_url().await?);
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium installed; launch failure is surfaced as an
//!   error so callers can downgrade browser scenarios to skips

pub mod browser;
pub mod error;
pub mod screenshot;

// Re-export commonly used types
pub use browser::{BrowserConfig, BrowserSession, CookieInfo};
pub use error::{GatecheckError, Result};
pub use screenshot::{capture_screenshot, ScreenshotOptions};

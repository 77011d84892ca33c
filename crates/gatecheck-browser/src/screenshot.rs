//! Screenshot capture using Chrome DevTools Protocol
//!
//! Captures land as PNG files in the suite's artifact directory. The
//! harness uses this for post-mortems when a scenario fails.

use crate::browser::BrowserSession;
use crate::error::Result;
use gatecheck_core::GatecheckError;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Screenshot capture options
#[derive(Debug, Clone)]
pub struct ScreenshotOptions {
    /// CSS selector for element screenshot (None for full page)
    pub selector: Option<String>,
    /// Capture the full page rather than the viewport
    pub full_page: bool,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            selector: None,
            full_page: true,
        }
    }
}

impl ScreenshotOptions {
    /// Options for a full-page screenshot
    pub fn full_page() -> Self {
        Self {
            selector: None,
            full_page: true,
        }
    }

    /// Options for a single-element screenshot
    pub fn element(selector: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            full_page: false,
        }
    }
}

/// Capture a screenshot and write it under the artifact directory
///
/// # Arguments
/// * `session` - Active browser session
/// * `artifact_dir` - Directory to write into (created if missing)
/// * `name` - File stem for the PNG
/// * `options` - Capture options
///
/// # Returns
/// Path of the written file
pub async fn capture_screenshot(
    session: &BrowserSession,
    artifact_dir: &Path,
    name: &str,
    options: ScreenshotOptions,
) -> Result<PathBuf> {
    let data = if let Some(ref selector) = options.selector {
        debug!("Capturing element screenshot: {}", selector);
        capture_element_screenshot(session, selector).await?
    } else {
        debug!("Capturing full page screenshot");
        capture_full_page_screenshot(session, options.full_page).await?
    };

    std::fs::create_dir_all(artifact_dir)?;
    let path = artifact_dir.join(format!("{}.png", name));
    std::fs::write(&path, &data)?;

    info!("Screenshot written: {} ({} bytes)", path.display(), data.len());
    Ok(path)
}

/// Capture full page screenshot
async fn capture_full_page_screenshot(session: &BrowserSession, full_page: bool) -> Result<Vec<u8>> {
    let tab = session.tab();

    let data = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, full_page)
        .map_err(|e| GatecheckError::Screenshot(format!("CDP capture failed: {}", e)))?;

    Ok(data)
}

/// Capture screenshot of a specific element
async fn capture_element_screenshot(session: &BrowserSession, selector: &str) -> Result<Vec<u8>> {
    let tab = session.tab();

    let element = tab
        .wait_for_element(selector)
        .map_err(|_e| GatecheckError::ElementNotFound {
            selector: selector.to_string(),
        })?;

    let data = element
        .capture_screenshot(CaptureScreenshotFormatOption::Png)
        .map_err(|e| GatecheckError::Screenshot(format!("Element capture failed: {}", e)))?;

    Ok(data)
}

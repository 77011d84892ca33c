//! Per-scenario setup: configuration, fixture, browser session

use gatecheck_browser::{capture_screenshot, BrowserConfig, BrowserSession, ScreenshotOptions};
use gatecheck_core::{Result, SuiteConfig};
use gatecheck_fixture::FixtureServer;
use gatecheck_pages::{DashboardPage, LoginPage};
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Everything one scenario needs, created fresh per test
///
/// Owns the embedded fixture (when used) and the browser session;
/// both are torn down when the scenario is dropped.
pub struct Scenario {
    config: SuiteConfig,
    /// Embedded fixture, kept alive for the scenario's lifetime
    #[allow(dead_code)]
    fixture: Option<FixtureServer>,
    session: BrowserSession,
    base_url: String,
}

impl Scenario {
    /// Set up a scenario: resolve configuration, start the fixture
    /// unless an external base URL is configured, launch the browser
    ///
    /// Returns `Ok(None)` when the browser cannot be launched in this
    /// environment; callers treat that as a skip. Fixture and
    /// configuration failures are real errors.
    pub async fn start() -> Result<Option<Self>> {
        init_tracing();

        let config = SuiteConfig::resolve()?;

        let (fixture, base_url) = if config.uses_embedded_fixture() {
            let fixture = FixtureServer::start()?;
            let base_url = fixture.base_url().to_string();
            (Some(fixture), base_url)
        } else {
            (None, config.base_url.clone())
        };

        let session = match BrowserSession::launch_with_config(BrowserConfig::from_suite(&config)).await {
            Ok(session) => session,
            Err(e) => {
                warn!("Browser unavailable, skipping scenario: {}", e);
                eprintln!("skipping browser scenario: {}", e);
                return Ok(None);
            }
        };

        Ok(Some(Self {
            config,
            fixture,
            session,
            base_url,
        }))
    }

    /// Base URL the scenario runs against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The active browser session
    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    /// Configured navigation timeout
    pub fn nav_timeout(&self) -> Duration {
        Duration::from_secs(self.config.nav_timeout_secs)
    }

    /// Fresh login page object over this scenario's session
    pub fn login_page(&self) -> LoginPage<'_> {
        LoginPage::new(&self.session, &self.base_url)
    }

    /// Fresh dashboard page object over this scenario's session
    pub fn dashboard_page(&self) -> DashboardPage<'_> {
        DashboardPage::new(&self.session, &self.base_url)
    }

    /// Wait for the post-login redirect, capturing a screenshot when
    /// it never arrives
    pub async fn expect_dashboard(&self) -> Result<String> {
        match self
            .dashboard_page()
            .wait_until_open(self.nav_timeout())
            .await
        {
            Ok(url) => Ok(url),
            Err(e) => {
                self.fail_screenshot("dashboard-redirect").await;
                Err(e)
            }
        }
    }

    /// Best-effort full-page screenshot into the artifact directory
    pub async fn fail_screenshot(&self, name: &str) {
        match capture_screenshot(
            &self.session,
            &self.config.artifact_dir,
            name,
            ScreenshotOptions::full_page(),
        )
        .await
        {
            Ok(path) => warn!("Failure screenshot written to {}", path.display()),
            Err(e) => debug!("Could not capture failure screenshot: {}", e),
        }
    }
}

/// Install the test subscriber once; later calls are no-ops
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

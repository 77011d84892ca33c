//! Page objects for the Gatecheck suite
//!
//! Each page object borrows an active [`gatecheck_browser::BrowserSession`]
//! and exposes intention-revealing actions and queries over a fixed set
//! of locators. Page objects are created fresh per scenario and hold no
//! state of their own beyond the target base URL.

pub mod dashboard;
pub mod locators;
pub mod login;

pub use dashboard::DashboardPage;
pub use login::LoginPage;

/// Join a base URL and an absolute path without doubling slashes
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

//! # gatecheck-core
//!
//! Core types for Gatecheck, a browser-driven smoke-test suite for a
//! web application's login flow.
//!
//! The suite is split into small crates: this one carries the pieces
//! every other crate needs, namely the unified error type, the suite
//! configuration, and the credential type the scenarios submit.
//!
//! ## Core Paradigm
//!
//! - Scenarios own nothing long-lived: a fresh browser session and a
//!   fresh page object per test case
//! - All waiting and retrying belongs to the automation framework, not
//!   to this code
//! - Expected login failures (wrong password, empty fields) are
//!   assertion subjects, never errors

mod config;
mod error;
mod types;

pub use config::SuiteConfig;
pub use error::{GatecheckError, Result};
pub use types::Credentials;

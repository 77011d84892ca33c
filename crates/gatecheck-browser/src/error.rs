//! Browser error types - re-exports the unified GatecheckError
//!
//! Browser failures use the unified error type from gatecheck-core:
//! - Browser(String) - launch, navigation, CDP and input failures
//! - ElementNotFound { selector } - framework wait gave up on a selector
//! - Screenshot(String) - capture or write failures

pub use gatecheck_core::{GatecheckError, Result};

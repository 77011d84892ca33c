//! Browser-driven scenarios for the login flow
//!
//! `src/` holds the scenario harness; the scenarios themselves live in
//! `tests/`. Each scenario gets a fresh fixture (unless
//! `GATECHECK_BASE_URL` points at a deployed application) and a fresh
//! browser session, so no state leaks between tests and any scenario
//! produces the same outcome alone or within the full suite.
//!
//! Scenarios are environment-gated: when Chrome cannot be launched the
//! harness reports a skip instead of failing, so the HTTP-level
//! fixture tests still run everywhere.

pub mod harness;

pub use harness::Scenario;

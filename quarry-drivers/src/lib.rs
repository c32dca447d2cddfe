//! Driver layer for browser automation.
//!
//! This crate exposes the browser driver and page/element helpers used to
//! drive a real browser session through a WebDriver service.
//!
//! - [`quarry_browser::driver::QuarryDriver`]: WebDriver client wrapper
//! - [`quarry_browser::page::QuarryPage`]: named waits and DOM lookups
//! - [`quarry_browser::cadence::InputCadence`]: human-like input pacing
//! - [`quarry_browser::profile`]: session profiles and automation-signal evasions
pub mod quarry_browser;

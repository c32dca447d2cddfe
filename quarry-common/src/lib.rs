//! Common types and utilities shared across Quarry crates.
//!
//! This crate defines the shared error taxonomy, the extraction strategy
//! enum, and the observability helpers used throughout the Quarry workspace.
//! It is intentionally lightweight and dependency-minimal so that all crates
//! can depend on it without introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`ExtractionStrategy`]: which page regions become a record's bodies
//! - [`observability`]: centralised tracing/logging initialisation
//! - [`QuarryError`] and [`Result`]: shared error handling
use serde::{Deserialize, Serialize};

pub mod observability;

/// How question and answer bodies are pulled out of a matched page.
///
/// `AcceptedAnswer` requires the page to carry an accepted answer and fails
/// otherwise. `LeadingBodies` takes the first two prose blocks on the page,
/// treating the second as the answer; whether that block really is an answer
/// is a structural assumption of the target site, not something we validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStrategy {
    AcceptedAnswer,
    LeadingBodies,
}

impl Default for ExtractionStrategy {
    fn default() -> Self {
        Self::AcceptedAnswer
    }
}

/// Error types used across the Quarry system.
#[derive(thiserror::Error, Debug)]
pub enum QuarryError {
    /// The login flow did not reach an authenticated state.
    #[error("login failed: {0}")]
    Login(String),

    /// The browser driver (WebDriver session, navigation) reported an error.
    #[error("driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The page no longer carries an element we rely on.
    #[error("page structure drift: no {role} matched `{selector}`")]
    MissingElement {
        role: &'static str,
        selector: String,
    },

    /// Writing the output file failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenient alias for results that use [`QuarryError`].
pub type Result<T> = std::result::Result<T, QuarryError>;

//! Stack Overflow session driving and question extraction.
//!
//! Everything here leans on the site contract pinned down in [`selectors`]:
//! a login form, a topbar search field, result-link anchors, and the
//! question page's title/prose/accepted-answer classes. Any markup change on
//! the site surfaces as a [`QuarryError::MissingElement`] naming the role we
//! were looking for.
use quarry_common::{QuarryError, Result};
use quarry_drivers::quarry_browser::page::{QuarryElement, QuarryPage};

pub mod question;
pub mod selectors;
pub mod session;

pub use question::BrowserQuestions;
pub use session::{QaSession, SiteEndpoints};

/// Wait for an element to appear, naming the role it plays on the page.
/// A wait that never completes reads as structure drift, not as a timeout.
pub(crate) async fn await_role(
    page: &QuarryPage,
    role: &'static str,
    selector: &'static str,
) -> Result<QuarryElement> {
    page.wait_for(selector)
        .await
        .map_err(|_| QuarryError::MissingElement {
            role,
            selector: selector.to_string(),
        })
}

/// Presence-checked lookup for an element that should already be on the page.
pub(crate) async fn require_role(
    page: &QuarryPage,
    role: &'static str,
    selector: &'static str,
) -> Result<QuarryElement> {
    page.find_one(selector)
        .await?
        .ok_or_else(|| QuarryError::MissingElement {
            role,
            selector: selector.to_string(),
        })
}

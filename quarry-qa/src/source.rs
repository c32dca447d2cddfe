use async_trait::async_trait;
use quarry_common::{ExtractionStrategy, Result};

/// A relative URL pulled from a search-result anchor, held only for the
/// duration of one run, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink(String);

impl CandidateLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Question and answer text pulled from one matched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBodies {
    pub question: String,
    pub answer: String,
}

/// The question pages behind candidate links.
///
/// The browser-backed implementation lives in [`crate::stackoverflow`];
/// tests substitute a scripted fake. Extraction is deliberately a separate
/// call from reading the title: bodies are only touched after the title has
/// matched, so a below-threshold page with a missing answer never fails.
#[async_trait]
pub trait QuestionSource {
    /// Navigate to the question page behind `link`.
    async fn open(&mut self, link: &CandidateLink) -> Result<()>;

    /// Visible text of the question title on the open page.
    async fn title(&mut self) -> Result<String>;

    /// Extract the question and answer bodies from the open page.
    async fn extract(&mut self, strategy: ExtractionStrategy) -> Result<ExtractedBodies>;
}

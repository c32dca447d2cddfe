use super::{await_role, require_role, selectors};
use crate::source::{CandidateLink, ExtractedBodies, QuestionSource};
use async_trait::async_trait;
use quarry_common::{ExtractionStrategy, QuarryError, Result};
use quarry_drivers::quarry_browser::{driver::QuarryDriver, page::QuarryPage};
use url::Url;

/// Browser-backed [`QuestionSource`]: opens each candidate link in the
/// session's tab and reads the question page through the site selectors.
pub struct BrowserQuestions<'d> {
    driver: &'d QuarryDriver,
    origin: Url,
    page: Option<QuarryPage>,
}

impl<'d> BrowserQuestions<'d> {
    pub fn new(driver: &'d QuarryDriver, origin: Url) -> Self {
        Self {
            driver,
            origin,
            page: None,
        }
    }

    fn page(&self) -> Result<&QuarryPage> {
        self.page
            .as_ref()
            .ok_or_else(|| QuarryError::Driver(anyhow::anyhow!("no question page is open")))
    }
}

#[async_trait]
impl QuestionSource for BrowserQuestions<'_> {
    async fn open(&mut self, link: &CandidateLink) -> Result<()> {
        let url = self.origin.join(link.as_str()).map_err(|e| {
            QuarryError::Config(format!(
                "candidate link `{}` does not resolve against the site origin: {e}",
                link.as_str()
            ))
        })?;
        self.page = Some(self.driver.open(url.as_str()).await?);
        Ok(())
    }

    async fn title(&mut self) -> Result<String> {
        let page = self.page()?;
        let title = await_role(page, "question title", selectors::QUESTION_TITLE).await?;
        Ok(title.text().await?)
    }

    async fn extract(&mut self, strategy: ExtractionStrategy) -> Result<ExtractedBodies> {
        let page = self.page()?;
        match strategy {
            ExtractionStrategy::AcceptedAnswer => {
                let question = require_role(page, "question body", selectors::PROSE_BLOCKS).await?;
                let answer =
                    require_role(page, "accepted answer body", selectors::ACCEPTED_ANSWER).await?;
                Ok(ExtractedBodies {
                    question: question.text().await?,
                    answer: answer.text().await?,
                })
            }
            ExtractionStrategy::LeadingBodies => {
                let blocks = page.find_all(selectors::PROSE_BLOCKS).await?;
                let mut blocks = blocks.into_iter();
                let question = blocks.next().ok_or_else(|| QuarryError::MissingElement {
                    role: "question body",
                    selector: selectors::PROSE_BLOCKS.to_string(),
                })?;
                // The second prose block stands in for the answer; that it
                // really is one is an assumption about the site's layout.
                let answer = blocks.next().ok_or_else(|| QuarryError::MissingElement {
                    role: "answer section distinct from the question body",
                    selector: selectors::PROSE_BLOCKS.to_string(),
                })?;
                Ok(ExtractedBodies {
                    question: question.text().await?,
                    answer: answer.text().await?,
                })
            }
        }
    }
}

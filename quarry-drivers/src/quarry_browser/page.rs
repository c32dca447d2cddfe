use crate::quarry_browser::{cadence::InputCadence, profile::WEBDRIVER_EVASIONS};
use anyhow::{Context, Result};
use fantoccini::key::Key;
use fantoccini::{elements::Element, Client, Locator};
use std::time::Duration;
use tracing::debug;

/// High-level page wrapper providing named waits and presence-checked
/// element lookups over the single driven tab.
pub struct QuarryPage {
    pub(crate) client: Client,
    cadence: InputCadence,
    wait_timeout: Duration,
}

impl QuarryPage {
    pub(crate) fn new(client: Client, cadence: InputCadence, wait_timeout: Duration) -> Self {
        Self {
            client,
            cadence,
            wait_timeout,
        }
    }

    /// Navigate to `url` and apply the automation-signal evasions.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.cadence.between_actions().await;
        debug!(target: "browser.nav", %url, "navigating");
        self.client.goto(url).await?;
        self.client.execute(WEBDRIVER_EVASIONS, vec![]).await?;
        Ok(())
    }

    /// Wait until an element matching `selector` is present, bounded by the
    /// driver's wait timeout. An expired wait is an error, never a hang.
    pub async fn wait_for(&self, selector: &str) -> Result<QuarryElement> {
        let element = self
            .client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::Css(selector))
            .await
            .with_context(|| format!("timed out waiting for `{selector}`"))?;
        Ok(QuarryElement::new(element, &self.cadence))
    }

    /// Find the first element matching `selector`, if any. Distinguishes
    /// "absent" from a driver failure so callers can attach their own
    /// structure-drift errors.
    pub async fn find_one(&self, selector: &str) -> Result<Option<QuarryElement>> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    /// Find zero or more elements by CSS selector, in document order.
    pub async fn find_all(&self, selector: &str) -> Result<Vec<QuarryElement>> {
        let elements = self.client.find_all(Locator::Css(selector)).await?;
        Ok(elements
            .into_iter()
            .map(|element| QuarryElement::new(element, &self.cadence))
            .collect())
    }

    /// Return the page title.
    pub async fn title(&self) -> Result<String> {
        self.client.title().await.map_err(anyhow::Error::from)
    }

    /// Return the current page URL.
    pub async fn current_url(&self) -> Result<String> {
        self.client
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(anyhow::Error::from)
    }
}

/// Wrapper for DOM elements that provides typed helpers consistent with
/// [`QuarryPage`].
#[derive(Clone)]
pub struct QuarryElement {
    pub element: Element,
    cadence: InputCadence,
}

impl QuarryElement {
    fn new(element: Element, cadence: &InputCadence) -> Self {
        Self {
            element,
            cadence: cadence.clone(),
        }
    }

    /// Type into the element using human-like timings.
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.cadence.type_into(&self.element, text).await
    }

    /// Press Enter with the element focused (keyboard form submission).
    pub async fn press_enter(&self) -> Result<()> {
        let enter = char::from(Key::Enter).to_string();
        self.element.send_keys(&enter).await?;
        Ok(())
    }

    /// Click the element after one inter-action gap.
    pub async fn click(&self) -> Result<()> {
        self.cadence.between_actions().await;
        self.element.clone().click().await?;
        Ok(())
    }

    /// Find the first child element matching `selector`, if any.
    pub async fn find_one(&self, selector: &str) -> Result<Option<QuarryElement>> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    /// Find zero or more child elements by CSS selector.
    pub async fn find_all(&self, selector: &str) -> Result<Vec<QuarryElement>> {
        let elements = self.element.find_all(Locator::Css(selector)).await?;
        Ok(elements
            .into_iter()
            .map(|element| QuarryElement::new(element, &self.cadence))
            .collect())
    }

    /// Read an attribute value.
    pub async fn attr(&self, attribute: &str) -> Result<Option<String>> {
        self.element
            .attr(attribute)
            .await
            .map_err(anyhow::Error::from)
    }

    /// Return the element's visible text.
    pub async fn text(&self) -> Result<String> {
        self.element.text().await.map_err(anyhow::Error::from)
    }
}

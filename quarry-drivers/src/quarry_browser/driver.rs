use crate::quarry_browser::{
    cadence::InputCadence,
    page::QuarryPage,
    profile::{browser_args, SessionProfile},
};
use anyhow::Result;
use fantoccini::ClientBuilder;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use webdriver::capabilities::Capabilities;

/// Connection settings for [`QuarryDriver::connect`].
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Address of a running WebDriver service.
    pub endpoint: String,
    /// Run without a visible window.
    pub headless: bool,
    /// Upper bound applied to every named wait.
    pub wait_timeout: Duration,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9515".to_string(),
            headless: false,
            wait_timeout: Duration::from_secs(30),
        }
    }
}

/// Thin wrapper around a `fantoccini` WebDriver client. Owns the single
/// browser tab the whole run drives.
pub struct QuarryDriver {
    pub client: fantoccini::Client,
    cadence: InputCadence,
    wait_timeout: Duration,
}

impl QuarryDriver {
    /// Create a new driver connected to a running WebDriver service.
    pub async fn connect(options: &DriverOptions) -> Result<Self> {
        let profile = SessionProfile::pick();

        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();
        chrome_opts.insert(
            "args".to_string(),
            json!(browser_args(&profile, options.headless)),
        );
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&options.endpoint)
            .await?;

        tracing::debug!(
            target: "browser.session",
            endpoint = %options.endpoint,
            headless = options.headless,
            "webdriver session established"
        );

        Ok(Self {
            client,
            cadence: InputCadence::new(),
            wait_timeout: options.wait_timeout,
        })
    }

    /// Navigate the tab to `url` and return a [`QuarryPage`] with the
    /// evasion script applied.
    pub async fn open(&self, url: &str) -> Result<QuarryPage> {
        let page = QuarryPage::new(self.client.clone(), self.cadence.clone(), self.wait_timeout);
        page.goto(url).await?;
        Ok(page)
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

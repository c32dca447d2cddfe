use super::{await_role, require_role, selectors};
use crate::matcher::Query;
use crate::source::CandidateLink;
use quarry_common::{QuarryError, Result};
use quarry_drivers::quarry_browser::{driver::QuarryDriver, page::QuarryPage};
use tracing::info;
use url::Url;

/// Where the target site lives.
#[derive(Debug, Clone)]
pub struct SiteEndpoints {
    pub origin: Url,
    pub login_path: String,
}

impl SiteEndpoints {
    pub fn new(origin: &str, login_path: &str) -> Result<Self> {
        let origin = Url::parse(origin)
            .map_err(|e| QuarryError::Config(format!("invalid site origin `{origin}`: {e}")))?;
        Ok(Self {
            origin,
            login_path: login_path.to_string(),
        })
    }

    fn login_url(&self) -> Result<Url> {
        self.origin.join(&self.login_path).map_err(|e| {
            QuarryError::Config(format!(
                "login path `{}` does not resolve against the site origin: {e}",
                self.login_path
            ))
        })
    }
}

/// An authenticated browser session on the Q&A site. Runs once per process:
/// log in, search, hand back the ordered candidate links.
pub struct QaSession {
    page: QuarryPage,
}

impl QaSession {
    /// Open the login form, submit the credentials, and wait for the
    /// authenticated-state indicator. Reaching the indicator is the login
    /// confirmation; there is no fixed sleep.
    pub async fn login(
        driver: &QuarryDriver,
        endpoints: &SiteEndpoints,
        email: &str,
        password: &str,
    ) -> Result<Self> {
        let login_url = endpoints.login_url()?;
        let page = driver.open(login_url.as_str()).await?;

        let email_field = await_role(&page, "login email field", selectors::LOGIN_EMAIL).await?;
        email_field.type_text(email).await?;

        let password_field =
            require_role(&page, "login password field", selectors::LOGIN_PASSWORD).await?;
        password_field.type_text(password).await?;

        let submit = require_role(&page, "login submit button", selectors::LOGIN_SUBMIT).await?;
        submit.click().await?;

        page.wait_for(selectors::AUTH_INDICATOR).await.map_err(|_| {
            QuarryError::Login(
                "no authenticated-state indicator appeared after submitting credentials".into(),
            )
        })?;

        info!(target: "qa.session", "login confirmed");
        Ok(Self { page })
    }

    /// Type the query into the site search field, submit by keyboard, turn
    /// the results one page forward, and collect every result link in
    /// document order. No dedup, no further pagination.
    pub async fn search(&self, query: &Query) -> Result<Vec<CandidateLink>> {
        let field = await_role(&self.page, "site search field", selectors::SEARCH_FIELD).await?;
        field.type_text(query.as_str()).await?;
        field.press_enter().await?;

        // The results page counts as reached once result anchors exist.
        await_role(&self.page, "search result links", selectors::RESULT_LINKS).await?;

        let layout =
            require_role(&self.page, "search results layout", selectors::RESULTS_LAYOUT).await?;
        layout.click().await?;

        let pagination = require_role(
            &self.page,
            "results pagination control",
            selectors::PAGINATION_CONTROL,
        )
        .await?;
        let next = pagination
            .find_one(selectors::PAGINATION_NEXT)
            .await?
            .ok_or_else(|| QuarryError::MissingElement {
                role: "pagination next-page affordance",
                selector: selectors::PAGINATION_NEXT.to_string(),
            })?;
        next.click().await?;

        await_role(&self.page, "search result links", selectors::RESULT_LINKS).await?;
        let anchors = self.page.find_all(selectors::RESULT_LINKS).await?;

        let mut links = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let href = anchor
                .attr("href")
                .await?
                .ok_or_else(|| QuarryError::MissingElement {
                    role: "result link target",
                    selector: selectors::RESULT_LINKS.to_string(),
                })?;
            links.push(CandidateLink::new(href));
        }

        info!(target: "qa.search", query = %query, links = links.len(), "collected candidate links");
        Ok(links)
    }
}

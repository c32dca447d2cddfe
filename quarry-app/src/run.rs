use crate::Cli;
use anyhow::{bail, Result};
use quarry_common::ExtractionStrategy;
use quarry_config::QuarryConfig;
use quarry_drivers::quarry_browser::driver::{DriverOptions, QuarryDriver};
use quarry_qa::harvest::{harvest, HarvestSummary};
use quarry_qa::matcher::{MatchPolicy, Query};
use quarry_qa::report::Report;
use quarry_qa::stackoverflow::{BrowserQuestions, QaSession, SiteEndpoints};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Wire configuration and CLI overrides into one sequential run:
/// connect, log in, search, process every candidate link.
pub(crate) async fn run_harvest(cli: Cli, cfg: QuarryConfig) -> Result<()> {
    let query = Query::from_words(&cli.words);
    let strategy = match cli.strategy.as_deref() {
        Some(raw) => parse_strategy(raw)?,
        None => cfg.matching.strategy,
    };
    let output = cli.output.clone().unwrap_or_else(|| cfg.output.path.clone());
    let endpoints = SiteEndpoints::new(&cfg.site.origin, &cfg.site.login_path)?;
    let policy = MatchPolicy::new(cfg.matching.threshold);

    let options = DriverOptions {
        endpoint: cfg.webdriver.endpoint.clone(),
        headless: cfg.webdriver.headless || cli.headless,
        wait_timeout: Duration::from_secs(cfg.webdriver.wait_timeout_secs),
    };
    let driver = QuarryDriver::connect(&options).await?;

    // Always attempt to close the browser session, also on failure.
    let outcome = drive(&driver, &cfg, &endpoints, &query, policy, strategy, &output).await;
    let _ = driver.close().await;
    let summary = outcome?;

    info!(
        links = summary.links,
        matches = summary.matches,
        output = %output.display(),
        "harvest complete"
    );
    Ok(())
}

async fn drive(
    driver: &QuarryDriver,
    cfg: &QuarryConfig,
    endpoints: &SiteEndpoints,
    query: &Query,
    policy: MatchPolicy,
    strategy: ExtractionStrategy,
    output: &Path,
) -> Result<HarvestSummary> {
    let session = QaSession::login(
        driver,
        endpoints,
        &cfg.credentials.email,
        &cfg.credentials.password,
    )
    .await?;

    let links = session.search(query).await?;
    let mut source = BrowserQuestions::new(driver, endpoints.origin.clone());
    let mut report = Report::new(strategy);

    let summary = harvest(
        &mut source,
        &links,
        query,
        &policy,
        strategy,
        &mut report,
        output,
    )
    .await?;
    Ok(summary)
}

fn parse_strategy(raw: &str) -> Result<ExtractionStrategy> {
    match raw {
        "accepted-answer" => Ok(ExtractionStrategy::AcceptedAnswer),
        "leading-bodies" => Ok(ExtractionStrategy::LeadingBodies),
        other => bail!(
            "unknown extraction strategy `{other}` (expected accepted-answer or leading-bodies)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_strategies() {
        assert_eq!(
            parse_strategy("accepted-answer").unwrap(),
            ExtractionStrategy::AcceptedAnswer
        );
        assert_eq!(
            parse_strategy("leading-bodies").unwrap(),
            ExtractionStrategy::LeadingBodies
        );
        assert!(parse_strategy("everything").is_err());
    }
}

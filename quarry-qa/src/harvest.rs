use crate::matcher::{MatchPolicy, Query};
use crate::report::{MatchRecord, Report};
use crate::source::{CandidateLink, QuestionSource};
use quarry_common::{ExtractionStrategy, Result};
use std::path::Path;
use tracing::info;

/// Counts for the end-of-run log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestSummary {
    pub links: usize,
    pub matches: usize,
}

/// Open one candidate link, judge its title, and on a match extract its
/// bodies into the report. Returns whether a record was appended.
///
/// Any missing element is fatal to the whole run; there is no per-link
/// isolation.
pub async fn process_link<S>(
    source: &mut S,
    link: &CandidateLink,
    query: &Query,
    policy: &MatchPolicy,
    strategy: ExtractionStrategy,
    report: &mut Report,
) -> Result<bool>
where
    S: QuestionSource + ?Sized,
{
    source.open(link).await?;
    let title = source.title().await?;
    let decision = policy.judge(query, &title);
    info!(
        target: "qa.match",
        link = link.as_str(),
        %title,
        score = decision.score,
        matched = decision.matched,
        "judged candidate"
    );

    if !decision.matched {
        return Ok(false);
    }

    let bodies = source.extract(strategy).await?;
    report.push(MatchRecord {
        title,
        question: bodies.question,
        answer: bodies.answer,
    });
    Ok(true)
}

/// Process every candidate link in discovery order, rewriting the output
/// file after each one — also when nothing was appended, which makes the
/// rewrite an idempotent no-op.
pub async fn harvest<S>(
    source: &mut S,
    links: &[CandidateLink],
    query: &Query,
    policy: &MatchPolicy,
    strategy: ExtractionStrategy,
    report: &mut Report,
    output: &Path,
) -> Result<HarvestSummary>
where
    S: QuestionSource + ?Sized,
{
    let mut matches = 0;
    for link in links {
        if process_link(source, link, query, policy, strategy, report).await? {
            matches += 1;
        }
        report.persist(output)?;
    }
    Ok(HarvestSummary {
        links: links.len(),
        matches,
    })
}

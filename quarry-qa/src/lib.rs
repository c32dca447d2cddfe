//! Q&A site workflow: session driving, title matching, and reporting.
//!
//! The flow is strictly sequential: one authenticated browser session
//! produces an ordered list of candidate links, then each link is opened,
//! scored against the query, and — on a match — extracted into the report,
//! which is re-persisted in full after every link.
//!
//! - [`stackoverflow`]: the concrete site session and question source
//! - [`matcher`]: query construction and the similarity policy
//! - [`report`]: ordered match records and their serialization
//! - [`harvest`]: the per-link processing loop
pub mod harvest;
pub mod matcher;
pub mod report;
pub mod source;
pub mod stackoverflow;

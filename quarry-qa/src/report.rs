use quarry_common::{ExtractionStrategy, Result};
use std::fs;
use std::path::Path;

/// One accepted question/answer pair, in the order it was discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub title: String,
    pub question: String,
    pub answer: String,
}

/// Literal framing for a rendered record. Each extraction strategy carries
/// its own labels and separator banner; the rendered bytes are part of the
/// output contract and must stay stable.
#[derive(Debug, Clone, Copy)]
pub struct RecordStyle {
    pub title_label: &'static str,
    pub question_label: &'static str,
    pub answer_label: &'static str,
    pub banner: &'static str,
}

const ACCEPTED_ANSWER_STYLE: RecordStyle = RecordStyle {
    title_label: "TITLE :\n",
    question_label: "QUESTION DESCRIPTION :\n",
    answer_label: "ANSWER :\n",
    banner: "\n******************************************** ANSWER ENDS HERE ***************************************************************\n\n",
};

const LEADING_BODIES_STYLE: RecordStyle = RecordStyle {
    title_label: "TITLE :\n",
    question_label: "QUESTION :\n",
    answer_label: "ANSWER :\n",
    banner: "\n================================================ END OF RECORD =================================================\n\n",
};

impl RecordStyle {
    pub fn for_strategy(strategy: ExtractionStrategy) -> Self {
        match strategy {
            ExtractionStrategy::AcceptedAnswer => ACCEPTED_ANSWER_STYLE,
            ExtractionStrategy::LeadingBodies => LEADING_BODIES_STYLE,
        }
    }

    fn render(&self, record: &MatchRecord) -> String {
        format!(
            "{}{}\n\n{}{}\n\n{}{}{}",
            self.title_label,
            record.title,
            self.question_label,
            record.question,
            self.answer_label,
            record.answer,
            self.banner,
        )
    }
}

/// Insertion-ordered, append-only sequence of match records for one run.
///
/// The report is the single source of truth for the output file: persisting
/// always rewrites the whole file from the records, so the file's final
/// content equals the rendered report no matter how many links were
/// processed in between.
#[derive(Debug)]
pub struct Report {
    style: RecordStyle,
    records: Vec<MatchRecord>,
}

impl Report {
    pub fn new(strategy: ExtractionStrategy) -> Self {
        Self {
            style: RecordStyle::for_strategy(strategy),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the ordered concatenation of all records.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|r| self.style.render(r))
            .collect()
    }

    /// Overwrite `path` with the full rendered report (UTF-8). A no-op
    /// rewrite when nothing was appended since the last call.
    pub fn persist(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u32) -> MatchRecord {
        MatchRecord {
            title: format!("Title {n}"),
            question: format!("Question {n}"),
            answer: format!("Answer {n}"),
        }
    }

    #[test]
    fn renders_accepted_answer_record_layout() {
        let mut report = Report::new(ExtractionStrategy::AcceptedAnswer);
        report.push(MatchRecord {
            title: "Reverse a String".to_string(),
            question: "How do I reverse it?".to_string(),
            answer: "Iterate from the end.".to_string(),
        });

        let rendered = report.render();
        assert!(rendered.starts_with("TITLE :\nReverse a String\n\n"));
        assert!(rendered.contains("QUESTION DESCRIPTION :\nHow do I reverse it?\n\n"));
        assert!(rendered.contains("ANSWER :\nIterate from the end.\n"));
        assert!(rendered.ends_with("ANSWER ENDS HERE ***************************************************************\n\n"));
    }

    #[test]
    fn leading_bodies_style_uses_its_own_literals() {
        let mut report = Report::new(ExtractionStrategy::LeadingBodies);
        report.push(record(1));

        let rendered = report.render();
        assert!(rendered.contains("QUESTION :\n"));
        assert!(!rendered.contains("QUESTION DESCRIPTION :\n"));
        assert!(rendered.contains("END OF RECORD"));
    }

    #[test]
    fn records_concatenate_in_insertion_order() {
        let mut report = Report::new(ExtractionStrategy::AcceptedAnswer);
        report.push(record(1));
        report.push(record(2));

        let rendered = report.render();
        let first = rendered.find("Title 1").unwrap();
        let second = rendered.find("Title 2").unwrap();
        assert!(first < second);

        let style = RecordStyle::for_strategy(ExtractionStrategy::AcceptedAnswer);
        assert_eq!(
            rendered,
            format!("{}{}", style.render(&record(1)), style.render(&record(2)))
        );
    }

    #[test]
    fn persist_overwrites_rather_than_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        let mut report = Report::new(ExtractionStrategy::AcceptedAnswer);
        report.push(record(1));
        report.persist(&path).unwrap();
        report.persist(&path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, report.render());
    }

    #[test]
    fn empty_report_persists_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");

        Report::new(ExtractionStrategy::AcceptedAnswer)
            .persist(&path)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}

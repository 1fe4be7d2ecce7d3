//! Plain-text case sheet.
//!
//! This is the display text vaka hands to operators and to the export
//! renderer: title, status, dates, location, description, numbered evidence
//! and the dated update log.

use std::fmt;

use crate::entities::Case;

const RULE_WIDTH: usize = 60;

/// Borrowed view that renders a case as a text sheet via `Display`.
#[derive(Debug, Clone, Copy)]
pub struct CaseSheet<'a> {
    case: &'a Case,
}

impl<'a> CaseSheet<'a> {
    #[must_use]
    pub const fn new(case: &'a Case) -> Self {
        Self { case }
    }

    /// The sheet without the surrounding `=` rules, for embedding in
    /// documents that draw their own frame.
    #[must_use]
    pub fn body(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_body(&mut out);
        out
    }

    fn write_body(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let case = self.case;
        writeln!(f, "Case ID: {}", case.id())?;
        writeln!(f, "Title: {}", case.title)?;
        writeln!(f, "Status: {}", case.status())?;
        writeln!(f, "Date Reported: {}", case.date_reported)?;
        writeln!(f, "Location: {}", case.location)?;
        writeln!(f)?;
        writeln!(f, "Description:")?;
        writeln!(f, "  {}", case.description)?;

        if !case.evidence.is_empty() {
            writeln!(f)?;
            writeln!(f, "Evidence:")?;
            for (index, item) in case.evidence.iter().enumerate() {
                writeln!(f, "  {}. {item}", index + 1)?;
            }
        }

        if !case.updates().is_empty() {
            writeln!(f)?;
            writeln!(f, "Updates:")?;
            for entry in case.updates() {
                writeln!(f, "  [{}] {}", entry.timestamp.format("%Y-%m-%d"), entry.text)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Created: {}", case.created_at().format("%Y-%m-%d"))?;
        write!(f, "Last Updated: {}", case.updated_at().format("%Y-%m-%d"))
    }
}

impl fmt::Display for CaseSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        self.write_body(f)?;
        writeln!(f)?;
        write!(f, "{rule}")
    }
}

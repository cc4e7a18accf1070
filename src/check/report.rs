//! Check reports.
//!
//! A [`CheckReport`] is the ordered table of [`CheckResult`] rows produced
//! by a run, one row per check in declaration order.

use serde::Serialize;

use crate::ui::Table;

use super::outcome::CheckOutcome;

/// One row of a check report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Result as text (`TRUE`, `FALSE: detail`, or a note).
    pub text: String,
    /// Result as a boolean; `None` when it cannot be classified.
    pub passed: Option<bool>,
}

impl CheckResult {
    /// Create a row from a check name and its outcome.
    pub fn new(name: impl Into<String>, outcome: &CheckOutcome) -> Self {
        Self {
            name: name.into(),
            text: outcome.text(),
            passed: outcome.passed(),
        }
    }

    /// Whether this row records a failure.
    pub fn is_failure(&self) -> bool {
        self.passed == Some(false)
    }
}

/// Ordered results of a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: Vec<CheckResult>,
}

impl CheckReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row at the end.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Put the rows of `prior` ahead of this report's rows.
    pub fn prepend(&mut self, prior: CheckReport) {
        let mut results = prior.results;
        results.append(&mut self.results);
        self.results = results;
    }

    /// All rows in order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Iterate over rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter()
    }

    /// Look up a row by check name.
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Rows that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Whether any row failed. Informational rows do not count.
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Render the report as a table with test, result and passed columns.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(vec!["Test", "Result", "Passed"]);
        for result in &self.results {
            let passed = match result.passed {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            };
            table.add_row(vec![result.name.as_str(), result.text.as_str(), passed]);
        }
        table
    }
}

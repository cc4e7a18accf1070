//! Check registry.
//!
//! A [`CheckSuite`] is an ordered list of named closures. [`run_checks`]
//! evaluates them in declaration order, streams one progress line per check
//! through the UI, and collects a [`CheckReport`].
//!
//! # Example
//!
//! ```
//! use projkit::check::{run_checks, CheckOutcome, CheckSuite, RunOptions};
//! use projkit::ui::MockUI;
//!
//! let scripts = 3;
//! let suite = CheckSuite::new()
//!     .check("Has scripts", || scripts > 0)
//!     .check("Lockfile", || CheckOutcome::fail("no project library"));
//!
//! let mut ui = MockUI::new();
//! let report = run_checks(suite, RunOptions::default(), &mut ui).unwrap();
//!
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.results()[1].text, "FALSE: no project library");
//! ```

use std::collections::HashSet;

use crate::error::{ProjkitError, Result};
use crate::ui::UserInterface;

use super::outcome::CheckValue;
use super::report::{CheckReport, CheckResult};

/// Width of the check-name column in the progress log.
pub const LABEL_WIDTH: usize = 40;

/// Character used to pad check names in the progress log.
pub const LABEL_FILL: char = '.';

type Thunk<'a> = Box<dyn FnOnce() -> CheckValue + 'a>;

/// A single named check.
pub struct Check<'a> {
    name: String,
    thunk: Thunk<'a>,
}

impl<'a> Check<'a> {
    /// Create a check from a name and a closure.
    pub fn new<F, V>(name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> V + 'a,
        V: Into<CheckValue>,
    {
        Self {
            name: name.into(),
            thunk: Box::new(move || f().into()),
        }
    }

    /// The check name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered collection of checks.
#[derive(Default)]
pub struct CheckSuite<'a> {
    checks: Vec<Check<'a>>,
}

impl<'a> CheckSuite<'a> {
    /// Create an empty suite.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a check, builder style.
    pub fn check<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> V + 'a,
        V: Into<CheckValue>,
    {
        self.push(Check::new(name, f));
        self
    }

    /// Add a check.
    pub fn push(&mut self, check: Check<'a>) {
        self.checks.push(check);
    }

    /// Check names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|c| c.name())
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the suite is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Options for [`run_checks`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Suppress the progress log.
    pub silent: bool,

    /// Report from an earlier suite whose rows come first.
    pub append: Option<CheckReport>,
}

/// Evaluate every check in `suite` and collect the results.
///
/// Unless silenced, each check's padded name and textual result are written
/// through `ui` as soon as the check has run. Rows from `options.append`
/// precede the new rows.
///
/// # Errors
///
/// Returns [`ProjkitError::DuplicateCheck`] before evaluating anything if two
/// checks share a name, and [`ProjkitError::NonScalarCheck`] naming every
/// check that yielded other than exactly one outcome. Both are mistakes in
/// the suite definition; no report is produced.
pub fn run_checks(
    suite: CheckSuite<'_>,
    options: RunOptions,
    ui: &mut dyn UserInterface,
) -> Result<CheckReport> {
    let mut seen = HashSet::new();
    for name in suite.names() {
        if !seen.insert(name) {
            return Err(ProjkitError::DuplicateCheck {
                name: name.to_string(),
            });
        }
    }

    let mut report = CheckReport::new();
    let mut non_scalar = Vec::new();

    for check in suite.checks {
        let value = (check.thunk)();
        match value.into_scalar() {
            Some(outcome) => {
                tracing::debug!("check '{}' -> {}", check.name, outcome.text());
                if !options.silent {
                    ui.message(&format!("{} {}", format_label(&check.name), outcome.text()));
                }
                report.push(CheckResult::new(check.name, &outcome));
            }
            None => non_scalar.push(check.name),
        }
    }

    if !non_scalar.is_empty() {
        return Err(ProjkitError::NonScalarCheck { names: non_scalar });
    }

    if let Some(prior) = options.append {
        report.prepend(prior);
    }

    Ok(report)
}

/// Pad or truncate a check name to [`LABEL_WIDTH`] characters.
pub fn format_label(name: &str) -> String {
    let mut label: String = name.chars().take(LABEL_WIDTH).collect();
    let len = label.chars().count();
    label.extend(std::iter::repeat_n(LABEL_FILL, LABEL_WIDTH - len));
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckOutcome;
    use crate::ui::MockUI;
    use std::cell::RefCell;

    #[test]
    fn one_row_per_check_in_declaration_order() {
        let suite = CheckSuite::new()
            .check("first", || true)
            .check("second", || CheckOutcome::fail("nope"))
            .check("third", || CheckOutcome::info("n/a"));
        let mut ui = MockUI::new();

        let report = run_checks(suite, RunOptions::default(), &mut ui).unwrap();

        let names: Vec<_> = report.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(report.results()[0].passed, Some(true));
        assert_eq!(report.results()[1].text, "FALSE: nope");
        assert_eq!(report.results()[2].passed, None);
    }

    #[test]
    fn evaluates_in_order() {
        let order = RefCell::new(Vec::new());
        let suite = CheckSuite::new()
            .check("a", || {
                order.borrow_mut().push("a");
                true
            })
            .check("b", || {
                order.borrow_mut().push("b");
                true
            });
        let mut ui = MockUI::new();

        run_checks(suite, RunOptions::default(), &mut ui).unwrap();

        assert_eq!(*order.borrow(), ["a", "b"]);
    }

    #[test]
    fn append_rows_come_first() {
        let mut ui = MockUI::new();
        let base = run_checks(
            CheckSuite::new().check("inherited", || true),
            RunOptions::default(),
            &mut ui,
        )
        .unwrap();

        let report = run_checks(
            CheckSuite::new().check("own", || false),
            RunOptions {
                silent: false,
                append: Some(base),
            },
            &mut ui,
        )
        .unwrap();

        let names: Vec<_> = report.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["inherited", "own"]);
    }

    #[test]
    fn two_element_result_aborts_naming_check() {
        let suite = CheckSuite::new()
            .check("fine", || true)
            .check("pair", || vec![true, false]);
        let mut ui = MockUI::new();

        let err = run_checks(suite, RunOptions::default(), &mut ui).unwrap_err();

        match err {
            ProjkitError::NonScalarCheck { names } => assert_eq!(names, ["pair"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_non_scalar_check_is_named() {
        let suite = CheckSuite::new()
            .check("empty", Vec::<CheckOutcome>::new)
            .check("pair", || vec![true, true]);
        let mut ui = MockUI::new();

        let err = run_checks(suite, RunOptions::default(), &mut ui).unwrap_err();

        assert!(err.to_string().contains("empty, pair"));
    }

    #[test]
    fn single_element_vector_is_accepted() {
        let suite = CheckSuite::new().check("one", || vec![CheckOutcome::Pass]);
        let mut ui = MockUI::new();

        let report = run_checks(suite, RunOptions::default(), &mut ui).unwrap();

        assert_eq!(report.results()[0].text, "TRUE");
    }

    #[test]
    fn duplicate_names_are_rejected_before_evaluation() {
        let ran = RefCell::new(false);
        let suite = CheckSuite::new()
            .check("same", || {
                *ran.borrow_mut() = true;
                true
            })
            .check("same", || true);
        let mut ui = MockUI::new();

        let err = run_checks(suite, RunOptions::default(), &mut ui).unwrap_err();

        assert!(matches!(err, ProjkitError::DuplicateCheck { .. }));
        assert!(!*ran.borrow());
    }

    #[test]
    fn streams_padded_name_and_result() {
        let suite = CheckSuite::new().check("Layout", || CheckOutcome::fail("models"));
        let mut ui = MockUI::new();

        run_checks(suite, RunOptions::default(), &mut ui).unwrap();

        let expected = format!("Layout{} FALSE: models", ".".repeat(LABEL_WIDTH - 6));
        assert_eq!(ui.messages(), [expected]);
    }

    #[test]
    fn silent_suppresses_progress() {
        let suite = CheckSuite::new().check("quiet", || true);
        let mut ui = MockUI::new();

        let report = run_checks(
            suite,
            RunOptions {
                silent: true,
                append: None,
            },
            &mut ui,
        )
        .unwrap();

        assert_eq!(report.len(), 1);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn label_is_truncated_to_width() {
        let long = "x".repeat(LABEL_WIDTH + 10);
        assert_eq!(format_label(&long).chars().count(), LABEL_WIDTH);
        assert_eq!(format_label("ab"), format!("ab{}", ".".repeat(LABEL_WIDTH - 2)));
    }

    #[test]
    fn empty_suite_yields_empty_report() {
        let mut ui = MockUI::new();
        let report = run_checks(CheckSuite::new(), RunOptions::default(), &mut ui).unwrap();
        assert!(report.is_empty());
    }
}

//! projkit - Best-practice setup and health checks for analysis projects.
//!
//! projkit lays out a statistical-analysis project in a standard shape and
//! checks that it stays reproducible: required folders exist, the
//! environment snapshot is current, the private package library matches
//! its lockfile, and every script carries its header fields.
//!
//! # Modules
//!
//! - [`check`] - Check registry, reports, and the session checker
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Layered configuration loading
//! - [`error`] - Error types and result aliases
//! - [`fields`] - Script header field extraction and validation
//! - [`ide`] - IDE active-project integration
//! - [`layout`] - Standard project folders
//! - [`library`] - Private package library status
//! - [`shell`] - External command execution
//! - [`snapshot`] - Environment-snapshot file
//! - [`snippets`] - Shared snippet library
//! - [`ui`] - Terminal output
//! - [`vcs`] - Committing generated files
//!
//! # Example
//!
//! ```
//! use projkit::check::{run_checks, CheckOutcome, CheckSuite, RunOptions};
//! use projkit::ui::MockUI;
//!
//! let suite = CheckSuite::new()
//!     .check("Answer is known", || true)
//!     .check("Answer is even", || CheckOutcome::fail("odd"));
//!
//! let mut ui = MockUI::new();
//! let report = run_checks(suite, RunOptions::default(), &mut ui).unwrap();
//!
//! assert_eq!(report.results()[0].text, "TRUE");
//! assert_eq!(report.results()[1].text, "FALSE: odd");
//! assert!(report.has_failures());
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod ide;
pub mod layout;
pub mod library;
pub mod shell;
pub mod snapshot;
pub mod snippets;
pub mod ui;
pub mod vcs;

pub use error::{ProjkitError, Result};

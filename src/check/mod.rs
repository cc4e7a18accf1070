//! Best-practice checks for analysis projects.
//!
//! - [`outcome`] - Tagged check outcomes and raw check values
//! - [`registry`] - Ordered check suites and the runner
//! - [`report`] - Report rows and tables
//! - [`session`] - The project health battery behind `projkit check`

pub mod outcome;
pub mod registry;
pub mod report;
pub mod session;

pub use outcome::{CheckOutcome, CheckValue};
pub use registry::{format_label, run_checks, Check, CheckSuite, RunOptions, LABEL_WIDTH};
pub use report::{CheckReport, CheckResult};
pub use session::{
    check_session, field_check_name, verify_working_directory, SessionContext, SessionOptions,
    ENVIRONMENT_INFO_CURRENT, HAS_ENVIRONMENT_INFO, LIBRARY_SETUP, VALID_PROJECT,
};

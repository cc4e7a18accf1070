//! Check outcome types.
//!
//! Every check produces a [`CheckOutcome`]: a pass, a failure with detail,
//! or an informational note that is neither. Check closures may return
//! anything convertible into a [`CheckValue`].

use crate::error::ProjkitError;

/// Result of evaluating a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The check passed.
    Pass,

    /// The check failed; the detail says why.
    Fail(String),

    /// Not applicable. Reported but never counted as a failure.
    Info(String),
}

impl CheckOutcome {
    /// Create a failure with detail.
    pub fn fail(detail: impl Into<String>) -> Self {
        Self::Fail(detail.into())
    }

    /// Create an informational outcome.
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info(message.into())
    }

    /// Text shown in the progress log and the report.
    pub fn text(&self) -> String {
        match self {
            Self::Pass => "TRUE".to_string(),
            Self::Fail(detail) if detail.is_empty() => "FALSE".to_string(),
            Self::Fail(detail) => format!("FALSE: {}", detail),
            Self::Info(message) => message.clone(),
        }
    }

    /// Boolean classification; `None` for informational outcomes.
    pub fn passed(&self) -> Option<bool> {
        match self {
            Self::Pass => Some(true),
            Self::Fail(_) => Some(false),
            Self::Info(_) => None,
        }
    }

    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail(_))
    }
}

impl From<bool> for CheckOutcome {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Pass
        } else {
            Self::Fail(String::new())
        }
    }
}

/// Raw value yielded by a check closure.
///
/// Checks must yield exactly one outcome. A [`CheckValue::Many`] holding a
/// single outcome is accepted; any other length aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckValue {
    /// A single outcome.
    One(CheckOutcome),

    /// A multi-valued result.
    Many(Vec<CheckOutcome>),
}

impl CheckValue {
    /// The single outcome, or `None` if the value is not scalar.
    pub fn into_scalar(self) -> Option<CheckOutcome> {
        match self {
            Self::One(outcome) => Some(outcome),
            Self::Many(mut outcomes) if outcomes.len() == 1 => outcomes.pop(),
            Self::Many(_) => None,
        }
    }
}

impl From<CheckOutcome> for CheckValue {
    fn from(outcome: CheckOutcome) -> Self {
        Self::One(outcome)
    }
}

impl From<bool> for CheckValue {
    fn from(ok: bool) -> Self {
        Self::One(ok.into())
    }
}

impl From<Vec<CheckOutcome>> for CheckValue {
    fn from(outcomes: Vec<CheckOutcome>) -> Self {
        Self::Many(outcomes)
    }
}

impl From<Vec<bool>> for CheckValue {
    fn from(values: Vec<bool>) -> Self {
        Self::Many(values.into_iter().map(CheckOutcome::from).collect())
    }
}

/// Errors raised while evaluating a check become that check's failure.
impl<T: Into<CheckValue>> From<Result<T, ProjkitError>> for CheckValue {
    fn from(result: Result<T, ProjkitError>) -> Self {
        match result {
            Ok(value) => value.into(),
            Err(e) => Self::One(CheckOutcome::fail(e.to_string())),
        }
    }
}

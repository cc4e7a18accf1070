//! Metadata fields in script headers.
//!
//! Analysis scripts carry a short header such as
//!
//! ```text
//! # Description: Fit the baseline mixed model
//! # Author: J. Doe
//! ```
//!
//! - [`extract_field`] reads one field from the leading lines of a file
//! - [`validate_field`] reports every file in a directory missing a field

mod extractor;
mod validator;

pub use extractor::{extract_field, DEFAULT_FIELD_LINES};
pub use validator::{validate_field, validate_field_within, DEFAULT_EXTENSION};

//! # stmx-grader
//!
//! A static autograder for Stella (`.stmx`, XMILE) carbon-cycle models. The
//! model is never simulated: variables and their equation text are read from
//! the document and scored against a fixed five-part rubric, with every
//! awarded or withheld point explained.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// For all things related to grading
pub mod grade;
/// Choosing which file in a directory to grade
pub mod submission;
/// For reading XMILE documents into variables
pub mod xmile;

pub use grade::{CheckResult, Report, grade_file, grade_variables};
pub use submission::{SubmissionError, find_submission};
pub use xmile::{
    ParseError, Variable, VariableKind, Variables, normalize, parse_document, parse_file,
};

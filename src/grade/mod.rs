#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Calibration of `GPP_base`.
pub mod calibration;
/// Mass conservation through `Total_Carbon`.
pub mod conservation;
/// Feedback mechanism detection and wiring.
pub mod feedback;
/// Orchestration of the full rubric.
pub mod report;
/// Shared check and report types.
pub mod results;
/// Scenario logic in the emissions flow.
pub mod scenario;
/// Text and JSON presentation of a report.
pub mod show;
/// Base model structure.
pub mod structure;

pub use calibration::check_calibration;
pub use conservation::check_mass_conservation;
pub use feedback::{FeedbackMechanism, Wiring, check_feedback};
pub use report::{grade_file, grade_variables, run_checks};
pub use results::{CheckResult, Report, percentage};
pub use scenario::check_scenarios;
pub use show::{render_json, render_text};
pub use structure::check_base_model;

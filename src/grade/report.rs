#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Runs the rubric in order and totals it.

use std::path::Path;

use super::{
    calibration::check_calibration,
    conservation::check_mass_conservation,
    feedback::check_feedback,
    results::{CheckResult, Report},
    scenario::check_scenarios,
    structure::check_base_model,
};
use crate::xmile::{Variables, parse_file};

/// Runs every rubric check in order: base model, calibration, feedback,
/// scenarios, mass conservation.
pub fn run_checks(variables: &Variables) -> Vec<CheckResult> {
    let mut checks = check_base_model(variables);
    checks.push(check_calibration(variables));
    checks.push(check_feedback(variables));
    checks.push(check_scenarios(variables));
    checks.push(check_mass_conservation(variables));

    for check in &checks {
        tracing::debug!(
            check = %check.name,
            passed = check.passed,
            "{}/{}",
            check.points,
            check.max_points
        );
    }
    checks
}

/// Grades an already parsed model, labelling the report with `filepath`.
pub fn grade_variables(filepath: impl Into<String>, variables: &Variables) -> Report {
    Report::from_checks(filepath, run_checks(variables))
}

/// Parses and grades the model at `filepath`. Never fails: a document that
/// cannot be parsed yields a report with `success == false`.
pub fn grade_file(filepath: impl AsRef<Path>) -> Report {
    let filepath = filepath.as_ref();
    match parse_file(filepath) {
        Ok(variables) => grade_variables(filepath.display().to_string(), &variables),
        Err(e) => {
            tracing::debug!("{}: {e}", filepath.display());
            Report::failed(format!("Failed to parse file: {e}"))
        }
    }
}

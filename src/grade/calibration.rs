#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Whether `GPP_base` was tuned into the range that reproduces observations.

use std::ops::RangeInclusive;

use super::results::CheckResult;
use crate::xmile::Variables;

/// Check label.
const NAME: &str = "Calibration";
/// Category ceiling.
pub const MAX_POINTS: f64 = 25.0;
/// Converter holding the calibrated parameter.
pub const GPP_BASE: &str = "gpp_base";
/// Values that pass at all.
pub const ACCEPTABLE: RangeInclusive<f64> = 100.0..=120.0;
/// Values that earn full marks.
pub const OPTIMAL: RangeInclusive<f64> = 108.0..=112.0;

/// Points when the equation is not a plain number.
const NOT_NUMERIC_POINTS: f64 = 10.0;
/// Points inside the acceptable band but outside the optimal one.
const ACCEPTABLE_POINTS: f64 = 20.0;
/// Points for a number outside the acceptable band.
const OUT_OF_RANGE_POINTS: f64 = 5.0;

/// Grades the value of `GPP_base`.
pub fn check_calibration(variables: &Variables) -> CheckResult {
    let Some(equation) = variables.equation(GPP_BASE) else {
        return CheckResult::fail(NAME, "GPP_base converter not found", 0.0, MAX_POINTS);
    };

    let equation = equation.trim();
    let Ok(value) = equation.parse::<f64>() else {
        return CheckResult::fail(
            NAME,
            format!("GPP_base is not a simple numeric value: \"{equation}\""),
            NOT_NUMERIC_POINTS,
            MAX_POINTS,
        );
    };

    if OPTIMAL.contains(&value) {
        CheckResult::pass(
            NAME,
            format!("GPP_base = {value:?} (well calibrated)"),
            MAX_POINTS,
            MAX_POINTS,
        )
    } else if ACCEPTABLE.contains(&value) {
        CheckResult::pass(
            NAME,
            format!("GPP_base = {value:?} (acceptable range but not optimal)"),
            ACCEPTABLE_POINTS,
            MAX_POINTS,
        )
    } else {
        CheckResult::fail(
            NAME,
            format!(
                "GPP_base = {value:?} (outside expected range {}-{})",
                ACCEPTABLE.start(),
                ACCEPTABLE.end()
            ),
            OUT_OF_RANGE_POINTS,
            MAX_POINTS,
        )
    }
}

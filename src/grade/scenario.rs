#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Emission scenarios selected through `IF ... THEN` on the Scenario converter.

use super::results::CheckResult;
use crate::xmile::Variables;

/// Check label.
const NAME: &str = "Scenario Design";
/// Category ceiling.
pub const MAX_POINTS: f64 = 20.0;

/// Flow whose equation must switch on the scenario.
pub const EMISSIONS: &str = "emissions";
/// Token naming the selector converter.
pub const SCENARIO_TOKEN: &str = "SCENARIO";

/// Grades the conditional logic in the emissions equation.
///
/// Matching is plain substring search on the upper-cased equation, so
/// `ELSE IF` counts as an `IF` and a two-branch equation naturally mentions
/// `SCENARIO` twice.
pub fn check_scenarios(variables: &Variables) -> CheckResult {
    let Some(equation) = variables.equation(EMISSIONS) else {
        return CheckResult::fail(NAME, "Emissions flow not found", 0.0, MAX_POINTS);
    };
    let equation = equation.to_uppercase();

    if !(equation.contains("IF") && equation.contains("THEN")) {
        return CheckResult::fail(
            NAME,
            "Emissions equation does not contain IF/THEN logic",
            5.0,
            MAX_POINTS,
        );
    }

    match equation.matches(SCENARIO_TOKEN).count() {
        0 => CheckResult::fail(
            NAME,
            "Emissions equation does not reference Scenario converter",
            10.0,
            MAX_POINTS,
        ),
        1 => CheckResult::pass(
            NAME,
            "Emissions uses IF/THEN with Scenario (may only have partial scenarios)",
            15.0,
            MAX_POINTS,
        ),
        count => CheckResult::pass(
            NAME,
            format!("Emissions uses IF/THEN with Scenario ({count} Scenario references)"),
            MAX_POINTS,
            MAX_POINTS,
        ),
    }
}

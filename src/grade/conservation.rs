#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

use super::results::CheckResult;
use crate::xmile::Variables;

/// Check label.
const NAME: &str = "Mass Conservation";
/// Category ceiling.
pub const MAX_POINTS: f64 = 10.0;
/// Converter that should sum every reservoir.
pub const TOTAL_CARBON: &str = "total_carbon";

/// Lowercase needle and display name for each stock `Total_Carbon` must sum.
const TERMS: [(&str, &str); 3] = [
    ("atmosphere", "Atmosphere"),
    ("vegetation", "Vegetation"),
    ("som", "SOM"),
];

/// Checks that `Total_Carbon` mentions all three stocks.
pub fn check_mass_conservation(variables: &Variables) -> CheckResult {
    let Some(equation) = variables.equation(TOTAL_CARBON) else {
        return CheckResult::fail(NAME, "Total_Carbon converter not found", 0.0, MAX_POINTS);
    };
    let equation = equation.to_lowercase();

    let missing = TERMS
        .iter()
        .filter(|(needle, _)| !equation.contains(needle))
        .map(|(_, label)| label)
        .collect_vec();

    if missing.is_empty() {
        CheckResult::pass(
            NAME,
            "Total_Carbon = Atmosphere + Vegetation + SOM",
            MAX_POINTS,
            MAX_POINTS,
        )
    } else {
        CheckResult::fail(
            NAME,
            format!("Total_Carbon missing: {}", missing.iter().join(", ")),
            5.0,
            MAX_POINTS,
        )
    }
}

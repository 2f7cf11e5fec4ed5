#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Presence of the stocks, flows and converters every submission must have.

use itertools::Itertools;

use super::results::CheckResult;
use crate::xmile::{VariableKind, Variables};

/// Carbon reservoirs.
pub const REQUIRED_STOCKS: [&str; 3] = ["atmosphere", "vegetation", "som"];

/// Fluxes between the reservoirs, plus anthropogenic emissions.
pub const REQUIRED_FLOWS: [&str; 5] = [
    "gpp",
    "autotrophic_respiration",
    "litterfall",
    "heterotrophic_respiration",
    "emissions",
];

/// Parameters and diagnostics the assignment asks for.
pub const REQUIRED_CONVERTERS: [&str; 4] = ["gpp_base", "scenario", "total_carbon", "rmse"];

/// Points for having every required stock.
pub const STOCK_POINTS: f64 = 4.0;
/// Points for having every required flow.
pub const FLOW_POINTS: f64 = 8.0;
/// Points for having every required converter.
pub const CONVERTER_POINTS: f64 = 8.0;

/// One all-or-nothing presence requirement.
struct Requirement {
    /// Check label.
    label:    &'static str,
    /// Noun used in the "Missing ..." message.
    plural:   &'static str,
    /// Normalized keys that must be present.
    keys:     &'static [&'static str],
    /// Kind each key must have.
    kind:     VariableKind,
    /// Points when nothing is missing.
    points:   f64,
    /// Message when nothing is missing.
    complete: &'static str,
}

/// The three base-model requirements in rubric order.
const REQUIREMENTS: [Requirement; 3] = [
    Requirement {
        label:    "Required Stocks",
        plural:   "stocks",
        keys:     &REQUIRED_STOCKS,
        kind:     VariableKind::Stock,
        points:   STOCK_POINTS,
        complete: "All 3 stocks present (Atmosphere, Vegetation, SOM)",
    },
    Requirement {
        label:    "Required Flows",
        plural:   "flows",
        keys:     &REQUIRED_FLOWS,
        kind:     VariableKind::Flow,
        points:   FLOW_POINTS,
        complete: "All 5 flows present",
    },
    Requirement {
        label:    "Required Converters",
        plural:   "converters",
        keys:     &REQUIRED_CONVERTERS,
        kind:     VariableKind::Aux,
        points:   CONVERTER_POINTS,
        complete: "All required converters present (GPP_base, Scenario, Total_Carbon, RMSE)",
    },
];

/// Checks that every required stock, flow and converter exists with the
/// right kind. Returns one result per requirement.
pub fn check_base_model(variables: &Variables) -> Vec<CheckResult> {
    REQUIREMENTS
        .iter()
        .map(|req| {
            let missing = variables.missing(req.keys, req.kind);
            if missing.is_empty() {
                CheckResult::pass(req.label, req.complete, req.points, req.points)
            } else {
                CheckResult::fail(
                    req.label,
                    format!("Missing {}: {}", req.plural, missing.iter().join(", ")),
                    0.0,
                    req.points,
                )
            }
        })
        .collect()
}
